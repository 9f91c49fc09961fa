use std::path::PathBuf;

pub const DEFAULT_DATASET_PATH: &str = "data/small_wikipedia.sample";
pub const DEFAULT_INDEX_PATH: &str = "small_inverted.index";

#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_path: PathBuf,
    pub index_path: PathBuf,
    pub workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
            workers: num_cpus::get(),
        }
    }
}
