mod admin_login_service;
mod draft_workspace_service;

pub use admin_login_service::AdminLoginService;
pub use draft_workspace_service::DraftWorkspaceService;
