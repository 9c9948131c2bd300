pub mod aligned_table;
pub mod cluster_label;
pub mod cluster_label_map;
pub mod neighbor;
pub mod vocabulary;
pub mod word;

pub use aligned_table::{AlignedWordVectorTable, WordVector};
pub use cluster_label::ClusterLabel;
pub use cluster_label_map::ClusterLabelMap;
pub use neighbor::Neighbor;
pub use vocabulary::Vocabulary;
pub use word::Word;
