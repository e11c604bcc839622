//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod export;
pub(crate) mod serve;
pub(crate) mod sidebar;

pub(crate) use check::CheckArgs;
pub(crate) use export::ExportArgs;
pub(crate) use serve::ServeArgs;
pub(crate) use sidebar::SidebarArgs;
