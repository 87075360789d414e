// Landing page sections

/// School display name used across the page (single source of truth)
pub const SCHOOL_NAME: &str = "Sekolah Islam Alhaq";
pub const SCHOOL_LOCATION: &str = "Margahayu";

mod features;
mod footer;
mod hero;
mod nav;
mod registration;

pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use registration::RegistrationSection;
