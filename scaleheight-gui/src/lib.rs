pub mod app;
pub mod logger;

use scaleheight::Version;

pub const VERSION: Version = Version {
    major: 0,
    minor: 1,
    patch: 0,
};
