use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::{ColorMode, Frame, OFF_FRAME, mask_frame, uniform_frame};
use crate::config::{FadeEngineConfig, FadeIntervals};
use crate::fader::PixelFader;
use crate::indicator::StatusIndicator;
use crate::intent::{IntentReceiver, LedChangeIntent, LedStateIntent};
use crate::mode::{LedMode, LedState};
use crate::scheduler::{IntervalGate, PassResult};
use crate::sensor::SensorReading;
use crate::tier::{AirQualityTier, TierThresholds};

/// Snapshot of the indicator state for status and adoption reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedStatus {
    pub mode: LedMode,
    pub state: LedState,
    pub brightness: u8,
    pub manual_color: Frame,
    /// Colors currently shown
    pub current: Frame,
    pub intervals: FadeIntervals,
    pub thresholds: TierThresholds,
    /// Tier of the last valid reading seen in automatic mode
    pub tier: Option<AirQualityTier>,
}

/// Fade orchestrator - decides what the fader moves toward, and when
///
/// Call [`FadeOrchestrator::tick`] once per pass of the host loop. The
/// orchestrator never changes mode by itself, mode and power only change
/// through the setters or through intents.
pub struct FadeOrchestrator<O: OutputDriver> {
    // Internal dependencies
    fader: PixelFader<O>,

    // Mode state
    mode: LedMode,
    state: LedState,
    manual_color: Frame,
    brightness: u8,
    thresholds: TierThresholds,
    intervals: FadeIntervals,

    // Timing
    auto_gate: IntervalGate,
    manual_gate: IntervalGate,

    /// Tier held for invalid readings
    tier: Option<AirQualityTier>,
}

impl<O: OutputDriver> FadeOrchestrator<O> {
    /// Create a new orchestrator driving `output`
    pub fn new(output: O, config: &FadeEngineConfig) -> Self {
        Self {
            fader: PixelFader::new(output, config.color_mode),
            mode: config.mode,
            state: config.state,
            manual_color: mask_frame(&config.manual_color, config.color_mode),
            brightness: config.brightness,
            thresholds: config.thresholds,
            intervals: config.intervals,
            auto_gate: IntervalGate::new(),
            manual_gate: IntervalGate::new(),
            tier: None,
        }
    }

    /// Run one scheduler pass.
    ///
    /// Advances the fader by at most one tick, if the interval of the current
    /// mode has elapsed. In automatic mode `reading` is only looked at when
    /// the interval has elapsed.
    pub fn tick(&mut self, now: Instant, reading: SensorReading) -> PassResult {
        let ticked = match self.mode {
            LedMode::Auto => self.auto_tick(now, reading),
            LedMode::Manual => self.manual_tick(now),
        };

        PassResult {
            ticked,
            next_deadline: self.next_deadline(),
        }
    }

    fn auto_tick(&mut self, now: Instant, reading: SensorReading) -> bool {
        if !self.auto_gate.poll(now, self.intervals.auto_fade) {
            return false;
        }

        if let Some(metric) = reading.value() {
            let tier = AirQualityTier::classify(metric, self.thresholds);
            if self.tier != Some(tier) {
                #[cfg(feature = "esp32-log")]
                println!("[FadeOrchestrator.auto_tick] metric {} -> tier {}", metric, tier.as_str());
                self.tier = Some(tier);
            }
        }

        // No valid reading seen yet: leave whatever is shown alone
        let Some(target) = self.auto_target() else {
            return false;
        };
        self.fader.crossfade_tick(&target);
        true
    }

    fn manual_tick(&mut self, now: Instant) -> bool {
        if !self.manual_gate.poll(now, self.intervals.fade) {
            return false;
        }

        let target = self.manual_target();
        self.fader.crossfade_tick(&target);
        true
    }

    /// Target of the automatic mode for the held tier
    pub fn auto_target(&self) -> Option<Frame> {
        let color = self.tier?.color().scale(self.brightness);
        Some(uniform_frame(color.masked(self.fader.color_mode())))
    }

    /// Target of the manual mode for the current power state
    pub const fn manual_target(&self) -> Frame {
        match self.state {
            LedState::Off => OFF_FRAME,
            LedState::On => self.manual_color,
        }
    }

    /// First instant at which the current mode can tick again
    pub fn next_deadline(&self) -> Instant {
        match self.mode {
            LedMode::Auto => self.auto_gate.next_deadline(self.intervals.auto_fade),
            LedMode::Manual => self.manual_gate.next_deadline(self.intervals.fade),
        }
    }

    /// Apply all pending intents from the channel (non-blocking)
    ///
    /// Returns the number of intents applied.
    pub fn process_intents<const SIZE: usize>(&mut self, intents: &IntentReceiver<'_, SIZE>) -> usize {
        let mut count = 0;
        for intent in intents.drain() {
            self.apply_intent(intent);
            count += 1;
        }
        count
    }

    /// Apply a single intent
    pub fn apply_intent(&mut self, intent: LedChangeIntent) {
        match intent {
            LedChangeIntent::State(state_intent) => self.apply_state_intent(&state_intent),
            LedChangeIntent::Brightness(brightness) => self.set_brightness(brightness),
            LedChangeIntent::FadeInterval(interval) => self.set_fade_interval(interval),
            LedChangeIntent::AutoFadeInterval(interval) => self.set_auto_fade_interval(interval),
            LedChangeIntent::Thresholds(thresholds) => self.set_thresholds(thresholds),
            LedChangeIntent::Indicator(indicator) => self.show_indicator(indicator),
        }
    }

    fn apply_state_intent(&mut self, intent: &LedStateIntent) {
        if let Some(mode) = intent.mode {
            self.set_mode(mode);
        }

        if let Some(state) = intent.state {
            self.set_state(state);
        }

        if let Some(color) = intent.color {
            if self.mode == LedMode::Manual {
                self.set_manual_color(&color);
            } else {
                #[cfg(feature = "esp32-log")]
                println!("[FadeOrchestrator.apply_state_intent] color ignored outside manual mode");
            }
        }
    }

    pub fn set_mode(&mut self, mode: LedMode) {
        if self.mode == mode {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!("[FadeOrchestrator.set_mode] {} -> {}", self.mode.as_str(), mode.as_str());
        self.mode = mode;
    }

    pub fn set_state(&mut self, state: LedState) {
        if self.state == state {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!("[FadeOrchestrator.set_state] {} -> {}", self.state.as_str(), state.as_str());
        self.state = state;
    }

    /// Set the target of the manual mode. Channels the color mode does not
    /// drive are dropped.
    pub fn set_manual_color(&mut self, color: &Frame) {
        self.manual_color = mask_frame(color, self.fader.color_mode());
        #[cfg(feature = "esp32-log")]
        println!("[FadeOrchestrator.set_manual_color] {:?}", self.manual_color);
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub fn set_fade_interval(&mut self, interval: Duration) {
        self.intervals.fade = interval;
    }

    pub fn set_auto_fade_interval(&mut self, interval: Duration) {
        self.intervals.auto_fade = interval;
    }

    pub fn set_thresholds(&mut self, thresholds: TierThresholds) {
        self.thresholds = thresholds;
    }

    /// Show a fixed status color right away.
    ///
    /// The color becomes the baseline of the next fade, so a following
    /// automatic or manual fade starts from it.
    pub fn show_indicator(&mut self, indicator: StatusIndicator) {
        self.fader.set_immediate(&indicator.frame());
    }

    /// Current indicator state, without side effects
    pub fn status(&self) -> LedStatus {
        LedStatus {
            mode: self.mode,
            state: self.state,
            brightness: self.brightness,
            manual_color: self.manual_color,
            current: *self.fader.current(),
            intervals: self.intervals,
            thresholds: self.thresholds,
            tier: self.tier,
        }
    }

    pub const fn mode(&self) -> LedMode {
        self.mode
    }

    pub const fn state(&self) -> LedState {
        self.state
    }

    pub const fn color_mode(&self) -> ColorMode {
        self.fader.color_mode()
    }

    /// Get a reference to the fader.
    pub const fn fader(&self) -> &PixelFader<O> {
        &self.fader
    }

    /// Get a mutable reference to the fader.
    pub fn fader_mut(&mut self) -> &mut PixelFader<O> {
        &mut self.fader
    }
}
