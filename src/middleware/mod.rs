pub mod flash;
pub mod response;

pub use flash::{redirect_with_flash, Flash, FlashLevel};
pub use response::{ApiResponse, ApiResult};
