// SSD1683 command definitions

// Initialization and reset
pub const SOFT_RESET: u8 = 0x12; // Soft reset
pub const BORDER_WAVEFORM: u8 = 0x3C; // Border waveform control
pub const WRITE_TEMP: u8 = 0x1A; // Write temperature register

// RAM and buffer management
pub const DATA_ENTRY_MODE: u8 = 0x11; // Data entry mode
pub const SET_RAM_X_RANGE: u8 = 0x44; // Set RAM X address window (bytes)
pub const SET_RAM_Y_RANGE: u8 = 0x45; // Set RAM Y address window (rows)
pub const SET_RAM_X_COUNTER: u8 = 0x4E; // Set RAM X address counter
pub const SET_RAM_Y_COUNTER: u8 = 0x4F; // Set RAM Y address counter
pub const WRITE_RAM_BW: u8 = 0x24; // Write primary (BW) RAM plane
pub const WRITE_RAM_RED: u8 = 0x26; // Write secondary (old image) RAM plane

// Display update and refresh
pub const DISPLAY_UPDATE_CTRL1: u8 = 0x21; // Display update control 1 (plane assignment)
pub const DISPLAY_UPDATE_CTRL2: u8 = 0x22; // Display update control 2 (waveform select)
pub const MASTER_ACTIVATION: u8 = 0x20; // Master activation

// DISPLAY_UPDATE_CTRL2 sequences
pub const CTRL2_FULL: u8 = 0xF7; // Full refresh waveform
pub const CTRL2_FAST: u8 = 0xC7; // Fast refresh waveform (after temperature load)
pub const CTRL2_PARTIAL: u8 = 0xFF; // Partial refresh waveform
pub const CTRL2_GRAY4: u8 = 0xCF; // 4-level gray waveform
pub const CTRL2_LOAD_TEMP: u8 = 0x91; // Load temperature value, no display

// DISPLAY_UPDATE_CTRL1 plane assignment used for partial refresh
pub const CTRL1_NORMAL: u8 = 0x00;

// Power management
pub const DEEP_SLEEP: u8 = 0x10; // Deep sleep
