pub mod modrinth;

pub use modrinth::ModrinthProvider;
