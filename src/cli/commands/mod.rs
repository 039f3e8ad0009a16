pub mod configure;
pub mod link;
pub mod remote_head;
pub mod show;
