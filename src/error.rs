use thiserror::Error;

/// Everything that can go wrong outside the simulation core. All of it is fatal.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("window creation failed: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),

    #[error("canvas creation failed: {0}")]
    Canvas(#[from] sdl2::IntegerOrSdlError),

    #[error("invalid logging config: {0}")]
    LogConfig(#[from] log4rs::config::runtime::ConfigErrors),

    #[error("logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}
