//! Periodic acquisition cycle and edge-event entry point
//!
//! `AcquisitionTask::run_cycle` is invoked from the board's periodic control
//! task; `handle_pin_change` is invoked from the pin-change interrupt. The
//! decoder behind the `SharedState` is the only state the two contexts share.

use super::{
    AcquisitionStats, AdcAverager, DigitalPinSet, PwmDecoder, ADC_AUX, ADC_BATTERY_I,
    ADC_BATTERY_V, ADC_PITOT,
};
use crate::communication::CommsLink;
use crate::core::traits::SharedState;
use crate::platform::traits::{AdcRingInterface, GpioBankInterface};
use crate::platform::Result;

/// One control cycle of the acquisition core
///
/// Owns the averaging engine, the pin tables, and the last applied
/// output-pin command. Created once at init and driven for the process
/// lifetime; no allocation, no blocking, bounded time per invocation.
pub struct AcquisitionTask {
    pins: DigitalPinSet,
    averager: AdcAverager,
    last_output_command: u8,
    stats: AcquisitionStats,
}

impl AcquisitionTask {
    /// Create the task state
    ///
    /// Bring-up has already driven all outputs low, so the cached command
    /// starts at zero and the first cycle only writes on a real change.
    pub const fn new(pins: DigitalPinSet) -> Self {
        Self {
            pins,
            averager: AdcAverager::new(),
            last_output_command: 0,
            stats: AcquisitionStats::new(),
        }
    }

    /// Run one control cycle
    ///
    /// Applies any pending output-pin command, samples the digital inputs,
    /// republishes the decoder's PWM values, drains and averages the ADC
    /// ring, and pushes the channel averages to the communications link.
    pub fn run_cycle<G, A, C, S>(
        &mut self,
        gpio: &mut G,
        adc: &mut A,
        comms: &mut C,
        pwm: &S,
    ) -> Result<()>
    where
        G: GpioBankInterface,
        A: AdcRingInterface,
        C: CommsLink,
        S: SharedState<PwmDecoder>,
    {
        // Copy output pin values from the last packet if they've changed
        let command = comms.output_pin_command();
        if command != self.last_output_command {
            gpio.write_pin_levels(command)?;
            self.last_output_command = command;
        }

        comms.set_input_pin_state(gpio.read_pin_levels());
        comms.set_pwm_values(pwm.with(|decoder| decoder.values()));

        let outcome = self.averager.drain_and_average(adc);
        self.stats.cycles = self.stats.cycles.wrapping_add(1);
        self.stats.samples_consumed = self
            .stats
            .samples_consumed
            .wrapping_add(outcome.consumed as u32);
        if outcome.rearmed {
            self.stats.rearms = self.stats.rearms.wrapping_add(1);
        }

        comms.set_pitot(outcome.averages[ADC_PITOT]);
        comms.set_current_voltage(
            outcome.averages[ADC_BATTERY_I],
            outcome.averages[ADC_BATTERY_V],
        );
        comms.set_auxiliary(outcome.averages[ADC_AUX]);

        Ok(())
    }

    /// Diagnostics counters
    pub fn stats(&self) -> AcquisitionStats {
        self.stats
    }

    /// Logical-to-physical pin tables
    pub fn pins(&self) -> &DigitalPinSet {
        &self.pins
    }
}

/// Edge-event entry point, called from the pin-change interrupt
///
/// Snapshots the pin levels, captures the counter once for the whole event,
/// and feeds both to the decoder. Runs to completion in bounded time.
pub fn handle_pin_change<G, S>(gpio: &G, pwm: &S)
where
    G: GpioBankInterface,
    S: SharedState<PwmDecoder>,
{
    let levels = gpio.read_pin_levels();
    let now = gpio.read_monotonic_counter();
    pwm.with_mut(|decoder| decoder.on_edge(levels, now));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquisition::{PulseCalibration, ADC_BUFFER_SIZE, NUM_ADC_CHANNELS};
    use crate::communication::MockComms;
    use crate::core::traits::MockState;
    use crate::platform::mock::{MockAdcRing, MockGpioBank};

    fn test_pins() -> DigitalPinSet {
        DigitalPinSet::new([4, 5, 6, 7], [0, 1, 2, 3])
    }

    #[test]
    fn test_output_command_applied_only_on_change() {
        let mut gpio = MockGpioBank::new();
        let mut adc = MockAdcRing::<ADC_BUFFER_SIZE>::new();
        let mut comms = MockComms::new();
        let pwm = MockState::new(PwmDecoder::default());
        let mut task = AcquisitionTask::new(test_pins());

        comms.set_output_command(0b0101);
        task.run_cycle(&mut gpio, &mut adc, &mut comms, &pwm).unwrap();
        assert_eq!(gpio.output_levels(), 0b0101);

        // Unchanged command: the bank is not rewritten
        gpio.write_pin_levels(0).unwrap();
        task.run_cycle(&mut gpio, &mut adc, &mut comms, &pwm).unwrap();
        assert_eq!(gpio.output_levels(), 0);

        comms.set_output_command(0b0011);
        task.run_cycle(&mut gpio, &mut adc, &mut comms, &pwm).unwrap();
        assert_eq!(gpio.output_levels(), 0b0011);
    }

    #[test]
    fn test_cycle_publishes_inputs_pwm_and_averages() {
        let mut gpio = MockGpioBank::new();
        let mut adc = MockAdcRing::<ADC_BUFFER_SIZE>::new();
        let mut comms = MockComms::new();
        let pwm = MockState::new(PwmDecoder::default());
        let mut task = AcquisitionTask::new(test_pins());

        // One decoded pulse on channel 1 before the cycle runs
        gpio.set_input_levels(0b0010);
        gpio.set_counter(10_000);
        handle_pin_change(&gpio, &pwm);
        gpio.set_input_levels(0b0000);
        gpio.advance_counter(PulseCalibration::DEFAULT.min_ticks + 2500);
        handle_pin_change(&gpio, &pwm);

        gpio.set_input_levels(0b1001);
        for _ in 0..32 {
            adc.push_frame(&[800, 1200, 400, 2000]);
        }
        task.run_cycle(&mut gpio, &mut adc, &mut comms, &pwm).unwrap();

        assert_eq!(comms.input_pin_state, 0b1001);
        assert_eq!(comms.last_pwm_values(), Some(&[0, 2500, 0, 0]));
        assert_eq!(comms.pitot, 800 << 4);
        assert_eq!(comms.current, 1200 << 4);
        assert_eq!(comms.voltage, 400 << 4);
        assert_eq!(comms.auxiliary, 2000 << 4);

        let stats = task.stats();
        assert_eq!(stats.cycles, 1);
        assert_eq!(stats.samples_consumed, 32 * NUM_ADC_CHANNELS as u32);
        assert_eq!(stats.rearms, 0);
    }

    #[test]
    fn test_stall_counted_in_stats() {
        let mut gpio = MockGpioBank::new();
        let mut adc = MockAdcRing::<ADC_BUFFER_SIZE>::new();
        let mut comms = MockComms::new();
        let pwm = MockState::new(PwmDecoder::default());
        let mut task = AcquisitionTask::new(test_pins());

        task.run_cycle(&mut gpio, &mut adc, &mut comms, &pwm).unwrap();
        task.run_cycle(&mut gpio, &mut adc, &mut comms, &pwm).unwrap();

        let stats = task.stats();
        assert_eq!(stats.cycles, 2);
        assert_eq!(stats.samples_consumed, 0);
        assert_eq!(stats.rearms, 2);
        assert_eq!(comms.pitot, 0);
    }

    #[test]
    fn test_pin_tables_are_retained() {
        let task = AcquisitionTask::new(test_pins());
        assert_eq!(task.pins().input_pin(3), 3);
        assert_eq!(task.pins().output_pin(0), 4);
    }
}
