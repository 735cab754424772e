pub mod camera;
pub mod catalog;
pub mod constants;
pub mod device;
pub mod gallery;
pub mod geometry;
pub mod input;
pub mod loading;
pub mod scene;
pub mod signal;
pub mod throttle;

pub use camera::*;
pub use catalog::*;
pub use device::*;
pub use gallery::*;
pub use input::*;
pub use loading::*;
pub use scene::*;
pub use signal::*;
pub use throttle::*;
