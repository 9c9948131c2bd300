//! The five pipeline stages, leaves first.

pub mod clustering;
pub mod expansion;
pub mod labeling;
pub mod projection;
pub mod reduction;

pub use expansion::expand;
pub use labeling::{cluster_centroids, label};
pub use projection::project;
