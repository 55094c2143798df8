//! Walking knight: a sprite that strolls across a canvas, idles, can be
//! picked up with the pointer, and bounces back into view when thrown.
//!
//! The crate compiles to WebAssembly for the browser and to a plain `rlib`
//! for native use. All behaviour lives in [`controller::Controller`], which is
//! independent of the browser: it consumes [`input::Event`]s and talks to the
//! renderer only through the [`stage::Stage`] trait. The browser binding in
//! [`engine`] is one `Stage`; [`stage::HeadlessStage`] is another.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | The state machine and bounce physics |
//! | [`character`] | The character record and idle timer draws |
//! | [`input`] | Host events, facing, state and drag policy |
//! | [`clip`] | Clip selection, playback and sprite sheet layout |
//! | [`stage`] | Renderer interface and a recording implementation |
//! | [`config`] | Tuning, loadable from JSON |
//! | [`geom`] | Points, vectors, sizes and the movement bounds |
//! | [`hit`] | Pointer hit-testing against the sprite |
//! | [`engine`] | Canvas stage and `wasm-bindgen` entry points |
//! | [`render`] | Drawing the current frame to a 2D context |
//! | [`error`] | Setup failures |
//! | [`consts`] | Default tuning constants |

pub mod character;
pub mod clip;
pub mod config;
pub mod consts;
pub mod controller;
pub mod engine;
pub mod error;
pub mod geom;
pub mod hit;
pub mod input;
pub mod render;
pub mod stage;

pub use config::ControllerConfig;
pub use controller::{Controller, Transition};
pub use error::SetupError;
pub use input::{DragPolicy, Event, Facing, State};
pub use stage::{HeadlessStage, Stage, StageCall};
