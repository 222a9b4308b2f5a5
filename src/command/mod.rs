pub use self::code_table::Codepage;
pub use self::font::Font;
pub use self::command::Command;
pub use self::command_table::{CommandTable, EffectCommand};
pub use self::effects::FontEffects;
pub use self::justification::Justification;
pub use self::scalar::{FontWidthScalar, FontHeightScalar, scalar_byte};

mod code_table;
mod command;
mod command_table;
mod effects;
mod font;
mod justification;
mod scalar;
