pub mod highlight;
pub mod output;

pub use highlight::Renderer;
pub use output::{mask_secret, print_frame, print_page};
