use crate::{Config, GameState};

/// Clamp raw paddle readings into the authoritative paddle state.
///
/// Returns the diagnostic word for the paddle output register.
pub fn update_paddles(state: &mut GameState, config: &Config, raw_p1: i32, raw_p2: i32) -> u16 {
    let [left, right] = &mut state.paddles;
    left.y = config.clamp_paddle_y(raw_p1);
    right.y = config.clamp_paddle_y(raw_p2);

    diagnostic_word(left.y, right.y)
}

/// Pack both paddles into 16 bits: paddle2 in the high byte, paddle1 in the low byte.
///
/// Lossy above 255: bits past 16 are dropped and a wide paddle1 bleeds into
/// the high byte. Only the diagnostic channel sees this.
pub fn diagnostic_word(p1: i32, p2: i32) -> u16 {
    ((p2 << 8) | p1) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Side;

    #[test]
    fn test_paddles_clamped_independently() {
        let config = Config::new();
        let mut state = GameState::new(&config);

        update_paddles(&mut state, &config, -50, 900);

        assert_eq!(state.paddle(Side::Left).y, 0);
        assert_eq!(state.paddle(Side::Right).y, 440);
    }

    #[test]
    fn test_paddles_overwrite_previous_tick() {
        let config = Config::new();
        let mut state = GameState::new(&config);

        update_paddles(&mut state, &config, 10, 20);
        update_paddles(&mut state, &config, 300, 5);

        assert_eq!(state.paddles[0].y, 300);
        assert_eq!(state.paddles[1].y, 5);
    }

    #[test]
    fn test_diagnostic_word_packs_bytes() {
        assert_eq!(diagnostic_word(0x12, 0x34), 0x3412);
        assert_eq!(diagnostic_word(0, 0), 0);
        assert_eq!(diagnostic_word(255, 255), 0xFFFF);
    }

    #[test]
    fn test_diagnostic_word_loses_high_positions() {
        // 440 << 8 = 0x1B800, truncated to 0xB800
        assert_eq!(diagnostic_word(0, 440), 0xB800);
        // 300 = 0x12C sets bit 8, which lands in paddle2's byte
        assert_eq!(diagnostic_word(300, 0), 0x012C);
        assert_eq!(diagnostic_word(300, 1), 0x012C);
    }

    #[test]
    fn test_update_paddles_returns_word_of_clamped_values() {
        let config = Config::new();
        let mut state = GameState::new(&config);

        let word = update_paddles(&mut state, &config, 7, -3);

        assert_eq!(word, 0x0007);
    }
}
