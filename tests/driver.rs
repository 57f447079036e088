mod tests {
    use obelisk_light_engine::{
        ChannelOrder, Colour, Direction, Duration, OutputDriver, Pattern, PatternConfig,
        StripConfig, StripDriver, TickState, UpdateChannel, WarningFadeState, colour,
    };

    const MAX_LEDS: usize = 10;
    const QUEUE: usize = 4;

    const COLOUR_ON: Colour = Colour { r: 255, g: 0, b: 0 };
    const COLOUR_OFF: Colour = Colour { r: 0, g: 255, b: 0 };
    const BLUE: Colour = Colour { r: 0, g: 0, b: 255 };

    #[derive(Default)]
    struct Capture {
        last: Vec<u8>,
    }

    impl OutputDriver for Capture {
        fn write(&mut self, bytes: &[u8]) {
            self.last = bytes.to_vec();
        }
    }

    fn strip(num_leds: usize, resolution_ms: u64) -> StripConfig {
        StripConfig {
            num_leds,
            resolution: Duration::from_millis(resolution_ms),
            channel_order: ChannelOrder::Rgb,
        }
    }

    fn driver_leds_3(
        channel: &UpdateChannel<QUEUE>,
    ) -> StripDriver<'_, Capture, MAX_LEDS, QUEUE> {
        StripDriver::new(strip(3, 1), Capture::default(), channel.receiver())
    }

    fn tick(
        driver: &mut StripDriver<'_, Capture, MAX_LEDS, QUEUE>,
        state: &mut TickState,
    ) -> Vec<u8> {
        let mut bytes = [0u8; MAX_LEDS * 3];
        driver.tick(state, &mut bytes);
        driver.output().last.clone()
    }

    fn frame_of(colours: &[Colour]) -> Vec<u8> {
        colours.iter().flat_map(|c| [c.r, c.g, c.b]).collect()
    }

    /***********************************************************************
     * Common behaviour
     **********************************************************************/

    #[test]
    fn test_counter_increments_by_resolution() {
        let channel = UpdateChannel::new();
        let mut driver = driver_leds_3(&channel);
        let mut state = TickState::new();

        tick(&mut driver, &mut state);

        assert_eq!(state.counter_ms, 1);
    }

    #[test]
    fn test_buffer_too_small_panics() {
        let channel = UpdateChannel::new();
        let mut driver = driver_leds_3(&channel);
        let mut state = TickState::new();
        let mut bytes = [0u8; 8];

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            driver.tick(&mut state, &mut bytes);
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_grb_channel_order_changes_byte_placement_only() {
        let channel = UpdateChannel::new();
        let mut driver: StripDriver<'_, Capture, MAX_LEDS, QUEUE> = StripDriver::new(
            StripConfig {
                num_leds: 2,
                resolution: Duration::from_millis(1),
                channel_order: ChannelOrder::Grb,
            },
            Capture::default(),
            channel.receiver(),
        );
        driver
            .params_mut()
            .pattern(Pattern::Colour)
            .colour_on(Colour { r: 1, g: 2, b: 3 });
        let mut state = TickState::new();

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, vec![2, 1, 3, 2, 1, 3]);
    }

    #[test]
    fn test_update_applied_at_tick_boundary_last_wins() {
        let channel = UpdateChannel::new();
        let mut driver = driver_leds_3(&channel);
        let mut state = TickState::new();

        let mut first = PatternConfig::new(3);
        first.pattern(Pattern::Colour).colour_on(COLOUR_ON);
        let mut second = PatternConfig::new(3);
        second.pattern(Pattern::Colour).colour_on(BLUE);
        channel.sender().try_send(first).unwrap();
        channel.sender().try_send(second).unwrap();

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[BLUE, BLUE, BLUE]));
    }

    /***********************************************************************
     * Colour pattern
     **********************************************************************/

    #[test]
    fn test_colour_fills_every_led() {
        let channel = UpdateChannel::new();
        let mut driver = driver_leds_3(&channel);
        driver
            .params_mut()
            .pattern(Pattern::Colour)
            .colour_on(COLOUR_ON);
        let mut state = TickState::new();

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_ON; 3]));
    }

    /***********************************************************************
     * Blink pattern
     **********************************************************************/

    fn blink_driver(
        channel: &UpdateChannel<QUEUE>,
    ) -> StripDriver<'_, Capture, MAX_LEDS, QUEUE> {
        let mut driver = driver_leds_3(channel);
        driver
            .params_mut()
            .pattern(Pattern::Blink)
            .period(Duration::from_millis(10))
            .duty_cycle(50)
            .colour_on(COLOUR_ON)
            .colour_off(COLOUR_OFF);
        driver
    }

    #[test]
    fn test_blink_shows_on_colour_within_duty() {
        let channel = UpdateChannel::new();
        let mut driver = blink_driver(&channel);
        let mut state = TickState::new();

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_ON; 3]));
    }

    #[test]
    fn test_blink_shows_off_colour_after_duty() {
        let channel = UpdateChannel::new();
        let mut driver = blink_driver(&channel);
        let mut state = TickState::new();
        state.counter_ms = 5;

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_OFF; 3]));
    }

    #[test]
    fn test_blink_resets_counter_and_restarts_cycle_in_same_tick() {
        let channel = UpdateChannel::new();
        let mut driver = blink_driver(&channel);
        let mut state = TickState::new();
        state.counter_ms = 10;

        let frame = tick(&mut driver, &mut state);

        assert_eq!(state.counter_ms, 1);
        assert_eq!(frame, frame_of(&[COLOUR_ON; 3]));
    }

    /***********************************************************************
     * Strobe pattern
     **********************************************************************/

    fn strobe_driver(
        channel: &UpdateChannel<QUEUE>,
    ) -> StripDriver<'_, Capture, MAX_LEDS, QUEUE> {
        let mut driver = driver_leds_3(channel);
        driver
            .params_mut()
            .pattern(Pattern::Strobe)
            .period(Duration::from_millis(10))
            .colour_on(COLOUR_ON)
            .colour_off(COLOUR_OFF);
        driver
    }

    #[test]
    fn test_strobe_shows_on_colour_in_first_half() {
        let channel = UpdateChannel::new();
        let mut driver = strobe_driver(&channel);
        let mut state = TickState::new();

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_ON; 3]));
    }

    #[test]
    fn test_strobe_shows_off_colour_in_second_half() {
        let channel = UpdateChannel::new();
        let mut driver = strobe_driver(&channel);
        let mut state = TickState::new();
        state.counter_ms = 5;

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_OFF; 3]));
    }

    #[test]
    fn test_strobe_resets_counter_after_period() {
        let channel = UpdateChannel::new();
        let mut driver = strobe_driver(&channel);
        let mut state = TickState::new();
        state.counter_ms = 10;

        tick(&mut driver, &mut state);

        assert_eq!(state.counter_ms, 1);
    }

    /***********************************************************************
     * Pulse pattern
     **********************************************************************/

    fn pulse_driver(
        channel: &UpdateChannel<QUEUE>,
        period_ms: u64,
    ) -> StripDriver<'_, Capture, MAX_LEDS, QUEUE> {
        let mut driver = driver_leds_3(channel);
        driver
            .params_mut()
            .pattern(Pattern::Pulse)
            .period(Duration::from_millis(period_ms))
            .colour_on(COLOUR_ON)
            .colour_off(COLOUR_OFF);
        driver
    }

    #[test]
    fn test_pulse_starts_at_on_colour() {
        let channel = UpdateChannel::new();
        let mut driver = pulse_driver(&channel, 3);
        let mut state = TickState::new();

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_ON; 3]));
    }

    #[test]
    fn test_pulse_truncated_midpoint() {
        let channel = UpdateChannel::new();
        let mut driver = pulse_driver(&channel, 3000);
        let mut state = TickState::new();
        state.counter_ms = 1500;

        let frame = tick(&mut driver, &mut state);

        let mid = Colour {
            r: 127,
            g: 127,
            b: 0,
        };
        assert_eq!(frame, frame_of(&[mid; 3]));
    }

    #[test]
    fn test_pulse_forces_exact_end_colour_on_final_step() {
        let channel = UpdateChannel::new();
        let mut driver = pulse_driver(&channel, 3);
        let mut state = TickState::new();
        state.counter_ms = 2;

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_OFF; 3]));
    }

    #[test]
    fn test_pulse_resets_counter_and_reverses_direction() {
        let channel = UpdateChannel::new();
        let mut driver = pulse_driver(&channel, 3);
        let mut state = TickState::new();
        state.counter_ms = 3;

        tick(&mut driver, &mut state);

        assert_eq!(state.counter_ms, 1);
        assert_eq!(state.duty_direction, -1);
    }

    #[test]
    fn test_pulse_reverse_direction_starts_at_off_colour() {
        let channel = UpdateChannel::new();
        let mut driver = pulse_driver(&channel, 3000);
        let mut state = TickState::new();
        state.duty_direction = -1;

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_OFF; 3]));
    }

    #[test]
    fn test_pulse_renders_off_colour_in_reversal_tick() {
        let channel = UpdateChannel::new();
        let mut driver = pulse_driver(&channel, 3000);
        let mut state = TickState::new();
        state.counter_ms = 3000;

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_OFF; 3]));
    }

    /***********************************************************************
     * Gradient pattern
     **********************************************************************/

    #[test]
    fn test_gradient_truncated_spatial_fade() {
        let channel = UpdateChannel::new();
        let mut driver = driver_leds_3(&channel);
        driver
            .params_mut()
            .pattern(Pattern::Gradient)
            .colour_on(COLOUR_ON)
            .colour_off(COLOUR_OFF);
        let mut state = TickState::new();

        let frame = tick(&mut driver, &mut state);

        // Integer slope truncation gives the 128/127 midpoint asymmetry
        let mid = Colour {
            r: 128,
            g: 127,
            b: 0,
        };
        assert_eq!(frame, frame_of(&[COLOUR_ON, mid, COLOUR_OFF]));
    }

    /***********************************************************************
     * Snake pattern
     **********************************************************************/

    fn snake_driver(
        channel: &UpdateChannel<QUEUE>,
        length: u32,
        reverse: bool,
    ) -> StripDriver<'_, Capture, MAX_LEDS, QUEUE> {
        let mut driver = driver_leds_3(channel);
        driver
            .params_mut()
            .pattern(Pattern::Snake)
            .period(Duration::from_millis(1000))
            .length(length)
            .snake_direction(if reverse {
                Direction::Reverse
            } else {
                Direction::Forward
            })
            .colour_on(COLOUR_ON)
            .colour_off(COLOUR_OFF);
        driver
    }

    #[test]
    fn test_snake_initial_state_shows_no_segment() {
        let channel = UpdateChannel::new();
        let mut driver = snake_driver(&channel, 2, false);
        let mut state = TickState::new();

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_OFF; 3]));
    }

    #[test]
    fn test_snake_advances_at_increment_period() {
        // period 1000 over numLeds + length = 5 positions: 200 ms each
        let channel = UpdateChannel::new();
        let mut driver = snake_driver(&channel, 2, false);
        let mut state = TickState::new();
        state.counter_ms = 200;

        tick(&mut driver, &mut state);

        assert_eq!(state.progress, 1);
        assert_eq!(state.counter_ms, 1);
    }

    #[test]
    fn test_snake_holds_between_increments() {
        let channel = UpdateChannel::new();
        let mut driver = snake_driver(&channel, 2, false);
        let mut state = TickState::new();

        tick(&mut driver, &mut state);

        assert_eq!(state.progress, 0);
    }

    #[test]
    fn test_snake_forward_window() {
        let channel = UpdateChannel::new();
        let mut driver = snake_driver(&channel, 2, false);
        let mut state = TickState::new();
        state.progress = 2;

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_ON, COLOUR_ON, COLOUR_OFF]));
    }

    #[test]
    fn test_snake_reverse_window() {
        let channel = UpdateChannel::new();
        let mut driver = snake_driver(&channel, 2, true);
        let mut state = TickState::new();
        state.progress = 2;

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_OFF, COLOUR_ON, COLOUR_ON]));
    }

    #[test]
    fn test_snake_partially_entered_segment() {
        let channel = UpdateChannel::new();
        let mut driver = snake_driver(&channel, 4, false);
        let mut state = TickState::new();
        state.progress = 2;

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_ON, COLOUR_ON, COLOUR_OFF]));
    }

    #[test]
    fn test_snake_reverse_partially_exited_segment() {
        let channel = UpdateChannel::new();
        let mut driver = snake_driver(&channel, 2, true);
        let mut state = TickState::new();
        state.progress = 4;

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_ON, COLOUR_OFF, COLOUR_OFF]));
    }

    #[test]
    fn test_snake_wraps_after_segment_fully_exits() {
        let channel = UpdateChannel::new();
        let mut driver = snake_driver(&channel, 2, false);
        let mut state = TickState::new();
        state.progress = 5;
        state.counter_ms = 200;

        tick(&mut driver, &mut state);

        assert_eq!(state.progress, 0);
    }

    /***********************************************************************
     * Progress pattern
     **********************************************************************/

    fn progress_driver(
        channel: &UpdateChannel<QUEUE>,
    ) -> StripDriver<'_, Capture, MAX_LEDS, QUEUE> {
        let mut driver = driver_leds_3(channel);
        driver
            .params_mut()
            .pattern(Pattern::Progress)
            .increment_delay(Duration::from_millis(10))
            .reset_delay(Duration::from_millis(3))
            .colour_on(COLOUR_ON)
            .colour_off(COLOUR_OFF);
        driver
    }

    #[test]
    fn test_progress_renders_initial_value() {
        let channel = UpdateChannel::new();
        let mut driver = progress_driver(&channel);
        driver.params_mut().initial_value(1);
        let mut state = TickState::new();

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_ON, COLOUR_OFF, COLOUR_OFF]));
    }

    #[test]
    fn test_progress_increments_after_delay() {
        let channel = UpdateChannel::new();
        let mut driver = progress_driver(&channel);
        let mut state = TickState::new();
        state.counter_ms = 10;

        tick(&mut driver, &mut state);

        assert_eq!(state.progress, 1);
        assert_eq!(state.counter_ms, 1);
    }

    #[test]
    fn test_progress_increments_by_configured_amount() {
        let channel = UpdateChannel::new();
        let mut driver = progress_driver(&channel);
        driver
            .params_mut()
            .increment(2)
            .increment_delay(Duration::from_millis(100));
        let mut state = TickState::new();
        state.counter_ms = 100;

        tick(&mut driver, &mut state);

        assert_eq!(state.progress, 2);
    }

    #[test]
    fn test_progress_forward_fill() {
        let channel = UpdateChannel::new();
        let mut driver = progress_driver(&channel);
        let mut state = TickState::new();
        state.progress = 2;

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_ON, COLOUR_ON, COLOUR_OFF]));
    }

    #[test]
    fn test_progress_reverse_fill() {
        let channel = UpdateChannel::new();
        let mut driver = progress_driver(&channel);
        driver.params_mut().progress_direction(Direction::Reverse);
        let mut state = TickState::new();
        state.progress = 2;

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_OFF, COLOUR_ON, COLOUR_ON]));
    }

    #[test]
    fn test_progress_resets_after_final_value_and_reset_delay() {
        let channel = UpdateChannel::new();
        let mut driver = progress_driver(&channel);
        driver.params_mut().final_value(2);
        let mut state = TickState::new();
        state.progress = 2;
        state.counter_ms = 13;

        tick(&mut driver, &mut state);

        assert_eq!(state.progress, 0);
        assert_eq!(state.counter_ms, 1);
    }

    #[test]
    fn test_progress_holds_full_bar_before_reset_delay() {
        let channel = UpdateChannel::new();
        let mut driver = progress_driver(&channel);
        driver.params_mut().initial_value(1);
        let mut state = TickState::new();
        state.progress = 3;
        state.counter_ms = 10;

        tick(&mut driver, &mut state);

        assert_eq!(state.progress, 3);
    }

    #[test]
    fn test_progress_growth_shows_on_following_tick() {
        let channel = UpdateChannel::new();
        let mut driver = progress_driver(&channel);
        driver.params_mut().final_value(1);
        let mut state = TickState::new();
        state.counter_ms = 13;

        // The tick that increments still renders the old bar
        let frame = tick(&mut driver, &mut state);
        assert_eq!(frame, frame_of(&[COLOUR_OFF; 3]));

        let frame = tick(&mut driver, &mut state);
        assert_eq!(frame, frame_of(&[COLOUR_ON, COLOUR_OFF, COLOUR_OFF]));
    }

    /***********************************************************************
     * Weather pattern
     **********************************************************************/

    fn weather_driver(
        channel: &UpdateChannel<QUEUE>,
    ) -> StripDriver<'_, Capture, MAX_LEDS, QUEUE> {
        let mut driver = driver_leds_3(channel);
        driver
            .params_mut()
            .pattern(Pattern::Weather)
            .colour_on(COLOUR_ON)
            .colour_off(COLOUR_OFF)
            .temp_fade_interval(Duration::from_secs(4));
        driver
    }

    #[test]
    fn test_weather_temperature_starts_at_on_colour() {
        let channel = UpdateChannel::new();
        let mut driver = weather_driver(&channel);
        let mut state = TickState::new();

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_ON; 3]));
    }

    #[test]
    fn test_weather_temperature_truncated_midpoint() {
        let channel = UpdateChannel::new();
        let mut driver = weather_driver(&channel);
        let mut state = TickState::new();
        state.counter_ms = 2000;

        let frame = tick(&mut driver, &mut state);

        let mid = Colour {
            r: 127,
            g: 127,
            b: 0,
        };
        assert_eq!(frame, frame_of(&[mid; 3]));
    }

    #[test]
    fn test_weather_temperature_forces_end_colour_on_final_step() {
        let channel = UpdateChannel::new();
        let mut driver = weather_driver(&channel);
        let mut state = TickState::new();
        state.counter_ms = 3999;

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_OFF; 3]));
    }

    #[test]
    fn test_weather_temperature_resets_counter_and_reverses() {
        let channel = UpdateChannel::new();
        let mut driver = weather_driver(&channel);
        let mut state = TickState::new();
        state.counter_ms = 4000;
        state.temp_fade_direction = -1;

        let frame = tick(&mut driver, &mut state);

        assert_eq!(state.counter_ms, 1);
        assert_eq!(state.temp_fade_direction, 1);
        // The reversal tick already renders the new sweep's start colour
        assert_eq!(frame, frame_of(&[COLOUR_ON; 3]));
    }

    fn rain_driver(
        channel: &UpdateChannel<QUEUE>,
    ) -> StripDriver<'_, Capture, MAX_LEDS, QUEUE> {
        let mut driver = weather_driver(channel);
        // Same colour at both ends keeps the base coat constant
        driver
            .params_mut()
            .colour_on(COLOUR_OFF)
            .rain_band_height(1)
            .rain_band_spacing(2)
            .rain_band_delay(Duration::from_millis(50))
            .rain_band_colour(BLUE);
        driver
    }

    #[test]
    fn test_weather_rain_band_overlays_base() {
        let channel = UpdateChannel::new();
        let mut driver = rain_driver(&channel);
        let mut state = TickState::new();
        state.rain_position = 1;

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_OFF, BLUE, COLOUR_OFF]));
    }

    #[test]
    fn test_weather_rain_band_advances_after_delay() {
        let channel = UpdateChannel::new();
        let mut driver = rain_driver(&channel);
        let mut state = TickState::new();
        state.rain_position = 1;
        state.rain_counter_ms = 50;

        let frame = tick(&mut driver, &mut state);

        assert_eq!(state.rain_position, 2);
        assert_eq!(frame, frame_of(&[COLOUR_OFF, COLOUR_OFF, BLUE]));
    }

    #[test]
    fn test_weather_rain_band_wraps_at_strip_end() {
        let channel = UpdateChannel::new();
        let mut driver = rain_driver(&channel);
        let mut state = TickState::new();
        state.rain_position = 2;
        state.rain_counter_ms = 50;

        tick(&mut driver, &mut state);

        assert_eq!(state.rain_position, 0);
    }

    #[test]
    fn test_weather_rain_disabled_at_zero_height() {
        let channel = UpdateChannel::new();
        let mut driver = rain_driver(&channel);
        driver.params_mut().rain_band_height(0);
        let mut state = TickState::new();

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_OFF; 3]));
    }

    fn warning_driver(
        channel: &UpdateChannel<QUEUE>,
    ) -> StripDriver<'_, Capture, MAX_LEDS, QUEUE> {
        let mut driver = weather_driver(channel);
        driver
            .params_mut()
            .colour_on(COLOUR_OFF)
            .warning_colour(Colour {
                r: 200,
                g: 100,
                b: 50,
            })
            .warning_fade_in(Duration::from_millis(1000))
            .warning_fade_out(Duration::from_millis(1000))
            .warning_off_dwell(Duration::from_millis(500));
        driver
    }

    #[test]
    fn test_weather_warning_overlays_whole_strip_mid_fade() {
        let channel = UpdateChannel::new();
        let mut driver = warning_driver(&channel);
        let mut state = TickState::new();
        state.warning_counter_ms = 500;

        let frame = tick(&mut driver, &mut state);

        let expected = Colour {
            r: 100,
            g: 50,
            b: 25,
        };
        assert_eq!(frame, frame_of(&[expected; 3]));
    }

    #[test]
    fn test_weather_warning_forces_target_on_fade_in_final_step() {
        let channel = UpdateChannel::new();
        let mut driver = warning_driver(&channel);
        let mut state = TickState::new();
        state.warning_counter_ms = 999;

        let frame = tick(&mut driver, &mut state);

        let target = Colour {
            r: 200,
            g: 100,
            b: 50,
        };
        assert_eq!(frame, frame_of(&[target; 3]));
    }

    #[test]
    fn test_weather_warning_black_is_transparent() {
        let channel = UpdateChannel::new();
        let mut driver = warning_driver(&channel);
        let mut state = TickState::new();
        state.warning_fade_state = WarningFadeState::OffDwell;

        let frame = tick(&mut driver, &mut state);

        // Off dwell computes black, so the temperature base stays visible
        assert_eq!(frame, frame_of(&[COLOUR_OFF; 3]));
    }

    #[test]
    fn test_weather_warning_cycles_through_phases() {
        let channel = UpdateChannel::new();
        let mut driver = warning_driver(&channel);
        let mut state = TickState::new();
        state.warning_counter_ms = 1000;

        tick(&mut driver, &mut state);
        assert_eq!(state.warning_fade_state, WarningFadeState::FadeOut);
        assert_eq!(state.warning_counter_ms, 1);

        state.warning_counter_ms = 1000;
        tick(&mut driver, &mut state);
        assert_eq!(state.warning_fade_state, WarningFadeState::OffDwell);

        state.warning_counter_ms = 500;
        tick(&mut driver, &mut state);
        assert_eq!(state.warning_fade_state, WarningFadeState::FadeIn);
    }

    #[test]
    fn test_weather_warning_disabled_by_black_colour() {
        let channel = UpdateChannel::new();
        let mut driver = warning_driver(&channel);
        driver.params_mut().warning_colour(colour::BLACK);
        let mut state = TickState::new();
        state.warning_counter_ms = 999;

        let frame = tick(&mut driver, &mut state);

        assert_eq!(frame, frame_of(&[COLOUR_OFF; 3]));
    }
}
