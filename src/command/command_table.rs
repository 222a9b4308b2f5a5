use super::{Command, FontEffects, Justification};

/// Enable and disable sequences of a single effect
#[derive(Clone, Debug, PartialEq)]
pub struct EffectCommand {
    pub effect: FontEffects,
    pub enable: Vec<u8>,
    pub disable: Vec<u8>
}

impl EffectCommand {
    fn new(effect: FontEffects, enable: Vec<u8>, disable: Vec<u8>) -> EffectCommand {
        EffectCommand {
            effect,
            enable,
            disable
        }
    }
}

/// Per-family command bytes
///
/// Built once for each printer, never modified afterwards. The families agree on everything but the reverse video command, which Reliance places under `GS B` and Phoenix under `ESC B`.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandTable {
    effects: Vec<EffectCommand>,
    init: Vec<u8>,
    newline: Vec<u8>,
    form_feed: Vec<u8>,
    /// `GS ! n`, the last byte gets patched on each use
    scalar_template: [u8; 3]
}

impl CommandTable {
    /// Table for the Reliance family
    pub fn reliance() -> CommandTable {
        CommandTable::with_reversed(vec![0x1d, 0x42, 0x01], vec![0x1d, 0x42, 0x00])
    }

    /// Table for the Phoenix family
    pub fn phoenix() -> CommandTable {
        CommandTable::with_reversed(vec![0x1b, 0x42, 0x01], vec![0x1b, 0x42, 0x00])
    }

    fn with_reversed(reversed_on: Vec<u8>, reversed_off: Vec<u8>) -> CommandTable {
        let esc_toggle = |code: u8| (vec![0x1b, code, 0x01], vec![0x1b, code, 0x00]);
        let (bold_on, bold_off) = esc_toggle(0x45);
        let (italic_on, italic_off) = esc_toggle(0x34);
        let (underline_on, underline_off) = esc_toggle(0x2d);
        let (rotated_on, rotated_off) = esc_toggle(0x56);
        let (upside_down_on, upside_down_off) = esc_toggle(0x7b);

        CommandTable {
            effects: vec![
                EffectCommand::new(FontEffects::ITALIC, italic_on, italic_off),
                EffectCommand::new(FontEffects::BOLD, bold_on, bold_off),
                EffectCommand::new(FontEffects::UNDERLINE, underline_on, underline_off),
                EffectCommand::new(FontEffects::ROTATED, rotated_on, rotated_off),
                EffectCommand::new(FontEffects::REVERSED, reversed_on, reversed_off),
                EffectCommand::new(FontEffects::UPSIDE_DOWN, upside_down_on, upside_down_off)
            ],
            init: Command::Init.as_bytes(),
            newline: Command::Newline.as_bytes(),
            form_feed: Command::FormFeed.as_bytes(),
            scalar_template: [0x1d, 0x21, 0x00]
        }
    }

    /// Enable sequence for a single named effect, `None` if the table has no (or an empty) command for it
    pub fn enable(&self, effect: FontEffects) -> Option<&[u8]> {
        self.effects.iter()
            .find(|command| command.effect == effect)
            .map(|command| command.enable.as_slice())
            .filter(|bytes| !bytes.is_empty())
    }

    /// Disable sequence for a single named effect
    pub fn disable(&self, effect: FontEffects) -> Option<&[u8]> {
        self.effects.iter()
            .find(|command| command.effect == effect)
            .map(|command| command.disable.as_slice())
            .filter(|bytes| !bytes.is_empty())
    }

    /// All the effect commands, in table order
    pub fn effects(&self) -> &[EffectCommand] {
        &self.effects
    }

    pub fn init(&self) -> &[u8] {
        &self.init
    }

    pub fn newline(&self) -> &[u8] {
        &self.newline
    }

    pub fn form_feed(&self) -> &[u8] {
        &self.form_feed
    }

    pub fn justification(&self, justification: Justification) -> Vec<u8> {
        Command::Justify{justification}.as_bytes()
    }

    /// Scalar command with the combined width/height byte patched in at index 2
    pub fn scalars(&self, scalar: u8) -> Vec<u8> {
        let mut command = self.scalar_template;
        command[2] = scalar;
        command.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{scalar_byte, FontWidthScalar, FontHeightScalar};

    #[test]
    fn reversed_differs_between_families() {
        assert_eq!(Some(&[0x1d, 0x42, 0x01][..]), CommandTable::reliance().enable(FontEffects::REVERSED));
        assert_eq!(Some(&[0x1b, 0x42, 0x00][..]), CommandTable::phoenix().disable(FontEffects::REVERSED));
    }

    #[test]
    fn esc_effects_are_shared() {
        let table = CommandTable::reliance();
        assert_eq!(Some(&[0x1b, 0x45, 0x01][..]), table.enable(FontEffects::BOLD));
        assert_eq!(Some(&[0x1b, 0x34, 0x00][..]), table.disable(FontEffects::ITALIC));
        assert_eq!(Some(&[0x1b, 0x2d, 0x01][..]), table.enable(FontEffects::UNDERLINE));
        assert_eq!(Some(&[0x1b, 0x56, 0x01][..]), table.enable(FontEffects::ROTATED));
        assert_eq!(Some(&[0x1b, 0x7b, 0x00][..]), table.disable(FontEffects::UPSIDE_DOWN));
    }

    #[test]
    fn combined_flags_have_no_command() {
        assert_eq!(None, CommandTable::phoenix().enable(FontEffects::BOLD | FontEffects::ITALIC));
    }

    #[test]
    fn scalar_template_is_patched() {
        assert_eq!(vec![0x1d, 0x21, 0x11], CommandTable::phoenix().scalars(0x11));
        let table = CommandTable::reliance();
        assert_eq!(vec![0x1d, 0x21, 0x00], table.scalars(scalar_byte(FontWidthScalar::W1, FontHeightScalar::H1)));
        assert_eq!(vec![0x1d, 0x21, 0x74], table.scalars(scalar_byte(FontWidthScalar::W8, FontHeightScalar::H5)));
    }
}
