pub mod clusterer;
pub mod dimension_reducer;
pub mod vector_source;

pub use clusterer::IClusterer;
pub use dimension_reducer::IDimensionReducer;
pub use vector_source::IVectorSource;
