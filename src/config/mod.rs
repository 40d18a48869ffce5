mod loader;
mod model;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
    USER_CONFIG_NAME,
};
pub use model::{
    Config, DEFAULT_INPUT_PATH, DEFAULT_WINDOW_END, DEFAULT_WINDOW_START, WindowConfig,
};
