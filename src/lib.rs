#![doc = include_str!("../README.md")]

pub use tintspace_color as color;
pub use tintspace_core as workspace;

#[doc(inline)]
pub use tintspace_color::{HexColorError, Oklch, Rgb};
#[doc(inline)]
pub use tintspace_core::{Error, Result};

pub mod prelude {
    //! Commonly used types, for `use tintspace::prelude::*`.
    //!
    //! ```rust
    //! use tintspace::prelude::*;
    //!
    //! let mut colors = WorkspaceColors::new(MemoryStore::new(), GenerationPolicy::default());
    //! let assignment = colors.assign_hex("/work/api", "#3a7bd5").unwrap();
    //! let custom = ColorCustomizations::from_assignment(&assignment, &Appearance::default());
    //! assert_eq!(custom.get("statusBar.background"), Some("#3a7bd5"));
    //! ```
    pub use tintspace_color::{
        Chromaticity, GenerationPolicy, HexColor, Oklch, Rgb, generate_random_color,
        generate_random_color_with, is_valid_hex_color, parse_hex_color,
    };
    pub use tintspace_core::{
        Appearance, Assignment, ColorCustomizations, ColorStore, FileStore, LightState,
        MemoryStore, Settings, WorkspaceColors,
    };
}
