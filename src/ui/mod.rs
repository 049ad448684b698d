// src/ui/mod.rs
pub mod theme;
pub mod header;
pub mod symptom_checker;
pub mod insights;
pub mod sidebar;
pub mod footer;
pub mod toasts;
