//! Application Layer

pub mod exhibits;
pub mod scores;

pub use exhibits::{
    CreateExhibitInput, ExhibitDetail, ExhibitService, ImageUpload, LoadedImage,
    UpdateExhibitInput,
};
pub use scores::{ScoreService, SubmitScoreInput};
