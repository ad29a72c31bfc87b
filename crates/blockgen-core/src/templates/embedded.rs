//! Template sources compiled into the binary
//!
//! Paths are relative to this file; the `.hbs` files live in the crate's
//! `templates/` directory.

pub const REUSABLE_COMPONENT: &str = include_str!("../../templates/reusable_component.hbs");
pub const BLOCK_COMPONENT: &str = include_str!("../../templates/block_component.hbs");
pub const BLOCK_ADMIN: &str = include_str!("../../templates/block_admin.hbs");
pub const README: &str = include_str!("../../templates/readme.hbs");
