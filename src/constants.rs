//! Game-wide tuning constants.

/// Lives at the start of every playthrough.
pub const STARTING_LIVES: u32 = 3;

/// Points awarded for each correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Options shown per round (one target plus the distractors).
pub const OPTIONS_PER_ROUND: usize = 4;

/// Distinct wrong options sampled per round.
pub const DISTRACTORS_PER_ROUND: usize = OPTIONS_PER_ROUND - 1;

/// Minimum catalog size required to start a game (a full round of options).
pub const MIN_CATALOG_SIZE: usize = OPTIONS_PER_ROUND;

/// How long answer feedback stays on screen before the next round is dealt.
pub const NEXT_ROUND_DELAY_MS: u64 = 1500;

/// Main loop input poll interval.
pub const POLL_INTERVAL_MS: u64 = 50;

/// Version magic for the profile save file ("ECOLEX01").
pub const SAVE_VERSION_MAGIC: u64 = 0x4543_4F4C_4558_3031;
