//! ユースケース層

pub mod app;

pub use app::MapperUseCase;
