mod export_engine;

pub use export_engine::ExportEngine;
