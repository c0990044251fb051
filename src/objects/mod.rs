pub mod celestial;
pub mod forces;
pub mod gamestate;
pub mod hud;
pub mod movables;
pub mod plugins;
pub mod telemetry;
pub mod traits;
pub mod world;

pub use self::gamestate::SandboxConfig;
pub use self::plugins::GravitySandbox;
