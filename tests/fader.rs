mod tests {
    use aqs_status_light::{
        ColorMode, FADE_WINDOW, Frame, OFF_FRAME, OutputDriver, PixelColor, PixelFader,
        color::uniform_frame,
        fader::{sampling_period, step_channel},
    };

    /// Records every committed batch
    #[derive(Default)]
    struct MockOutput {
        staged: Vec<(usize, Vec<u8>)>,
        commits: Vec<Vec<(usize, Vec<u8>)>>,
    }

    impl OutputDriver for MockOutput {
        fn set_channels(&mut self, pixel: usize, channels: &[u8]) {
            self.staged.push((pixel, channels.to_vec()));
        }

        fn commit(&mut self) {
            self.commits.push(std::mem::take(&mut self.staged));
        }
    }

    fn fader(mode: ColorMode) -> PixelFader<MockOutput> {
        PixelFader::new(MockOutput::default(), mode)
    }

    fn single(color: PixelColor) -> Frame {
        [color, PixelColor::OFF, PixelColor::OFF]
    }

    fn run(fader: &mut PixelFader<MockOutput>, targets: &Frame, ticks: u16) {
        for _ in 0..ticks {
            fader.crossfade_tick(targets);
        }
    }

    #[test]
    fn test_sampling_period() {
        assert_eq!(sampling_period(0, 0), 0);
        assert_eq!(sampling_period(0, 50), 20);
        assert_eq!(sampling_period(0, 4), 255);
        assert_eq!(sampling_period(0, 255), 4);
        assert_eq!(sampling_period(200, 100), -10);
        assert_eq!(sampling_period(0, 1), 1020);
        // truncated: 1020 / 100 = 10.2
        assert_eq!(sampling_period(0, 100), 10);
    }

    #[test]
    fn test_step_channel() {
        assert_eq!(step_channel(10, 0, 20), 10);
        assert_eq!(step_channel(10, 20, 19), 10);
        assert_eq!(step_channel(10, 20, 40), 11);
        assert_eq!(step_channel(10, -20, 40), 9);
        assert_eq!(step_channel(255, 4, 8), 255);
        assert_eq!(step_channel(0, -4, 8), 0);
    }

    #[test]
    fn test_green_fade_scenario() {
        let mut fader = fader(ColorMode::Rgb);
        let targets = single(PixelColor::new(0, 50, 0));

        run(&mut fader, &targets, 19);
        assert_eq!(fader.current()[0], PixelColor::OFF);

        fader.crossfade_tick(&targets);
        assert_eq!(fader.current()[0], PixelColor::new(0, 1, 0));
        assert_eq!(fader.steps()[0][..3], [0, 20, 0]);

        run(&mut fader, &targets, 980);
        assert_eq!(fader.counter(), 1000);
        assert_eq!(fader.current()[0], PixelColor::new(0, 50, 0));
        assert_eq!(fader.previous()[0], PixelColor::OFF);

        // 1020 / 50 truncates to 20, so the last tick of the window moves once more
        run(&mut fader, &targets, 20);
        assert_eq!(fader.counter(), 0);
        assert_eq!(fader.current()[0], PixelColor::new(0, 51, 0));
        assert_eq!(fader.previous(), fader.current());
    }

    #[test]
    fn test_exact_divisor_converges_in_one_window() {
        let mut fader = fader(ColorMode::Rgb);
        let targets = uniform_frame(PixelColor::new(4, 255, 12));

        run(&mut fader, &targets, FADE_WINDOW);

        assert_eq!(fader.counter(), 0);
        assert_eq!(*fader.current(), targets);
        assert_eq!(*fader.previous(), targets);
    }

    #[test]
    fn test_window_commits_and_next_window_corrects_overshoot() {
        let mut fader = fader(ColorMode::Rgb);
        let targets = single(PixelColor::new(0, 50, 0));

        run(&mut fader, &targets, FADE_WINDOW);
        assert_eq!(fader.previous()[0].g, 51);

        // delta -1 -> period -1020, a single move on the last tick
        run(&mut fader, &targets, FADE_WINDOW - 1);
        assert_eq!(fader.current()[0].g, 51);
        fader.crossfade_tick(&targets);
        assert_eq!(fader.current()[0].g, 50);
        assert_eq!(fader.previous()[0].g, 50);
    }

    #[test]
    fn test_zero_delta_is_stable() {
        let mut fader = fader(ColorMode::Rgb);
        let color = uniform_frame(PixelColor::new(10, 20, 30));
        fader.set_immediate(&color);

        for _ in 0..FADE_WINDOW {
            fader.crossfade_tick(&color);
            assert_eq!(*fader.current(), color);
        }
        assert_eq!(fader.steps()[1][..3], [0, 0, 0]);
    }

    #[test]
    fn test_direction_is_monotonic() {
        let mut fader = fader(ColorMode::Rgb);
        fader.set_immediate(&single(PixelColor::new(0, 200, 90)));
        let targets = single(PixelColor::new(255, 7, 90));

        let mut last = fader.current()[0];
        for _ in 0..FADE_WINDOW {
            fader.crossfade_tick(&targets);
            let now = fader.current()[0];
            assert!(now.r >= last.r);
            assert!(now.g <= last.g);
            assert_eq!(now.b, 90);
            last = now;
        }
        assert_eq!(last.r, 255);
    }

    #[test]
    fn test_overshoot_is_clamped() {
        let mut fader = fader(ColorMode::Rgb);
        fader.set_immediate(&single(PixelColor::new(55, 200, 0)));
        // delta +200 and -200: period 5, 204 moves in a window
        let targets = single(PixelColor::new(255, 0, 0));

        run(&mut fader, &targets, FADE_WINDOW);

        assert_eq!(fader.current()[0], PixelColor::new(255, 0, 0));
    }

    #[test]
    fn test_non_divisor_drift_is_kept() {
        let mut fader = fader(ColorMode::Rgb);
        fader.set_immediate(&single(PixelColor::new(200, 0, 0)));
        let targets = single(PixelColor::new(100, 0, 0));

        run(&mut fader, &targets, FADE_WINDOW);

        // period -10 gives 102 moves instead of 100
        assert_eq!(fader.current()[0].r, 98);
    }

    #[test]
    fn test_target_change_mid_window_uses_same_baseline() {
        let mut fader = fader(ColorMode::Rgb);
        run(&mut fader, &single(PixelColor::new(0, 0, 255)), 100);
        assert_eq!(fader.current()[0].b, 25);

        // Baseline is still black, period for 51 is 20
        let targets = single(PixelColor::new(0, 0, 51));
        run(&mut fader, &targets, 20);
        assert_eq!(fader.counter(), 120);
        assert_eq!(fader.steps()[0][2], 20);
        assert_eq!(fader.current()[0].b, 26);
    }

    #[test]
    fn test_set_immediate_pushes_and_sets_baseline() {
        let mut fader = fader(ColorMode::Rgb);
        run(&mut fader, &OFF_FRAME, 5);
        let frame = [
            PixelColor::new(1, 2, 3),
            PixelColor::new(4, 5, 6),
            PixelColor::new(7, 8, 9),
        ];

        fader.set_immediate(&frame);

        assert_eq!(*fader.current(), frame);
        assert_eq!(*fader.previous(), frame);
        assert_eq!(fader.counter(), 5);
        let last = fader.output().commits.last().unwrap();
        assert_eq!(
            *last,
            vec![(0, vec![1, 2, 3]), (1, vec![4, 5, 6]), (2, vec![7, 8, 9])]
        );
    }

    #[test]
    fn test_every_tick_commits_all_pixels_once() {
        let mut fader = fader(ColorMode::Rgb);
        run(&mut fader, &uniform_frame(PixelColor::new(9, 9, 9)), 3);

        let commits = &fader.output().commits;
        assert_eq!(commits.len(), 3);
        for batch in commits {
            let pixels: Vec<usize> = batch.iter().map(|(pixel, _)| *pixel).collect();
            assert_eq!(pixels, vec![0, 1, 2]);
            assert!(batch.iter().all(|(_, channels)| channels.len() == 3));
        }
    }

    #[test]
    fn test_rgbw_fades_white_channel() {
        let mut fader = fader(ColorMode::Rgbw);
        let targets = uniform_frame(PixelColor::new_rgbw(0, 0, 0, 4));

        run(&mut fader, &targets, FADE_WINDOW);

        assert_eq!(fader.current()[2], PixelColor::new_rgbw(0, 0, 0, 4));
        let last = fader.output().commits.last().unwrap();
        assert_eq!(last[2], (2, vec![0, 0, 0, 4]));
    }

    #[test]
    fn test_rgb_ignores_white_channel() {
        let mut fader = fader(ColorMode::Rgb);
        let targets = uniform_frame(PixelColor::new_rgbw(0, 0, 0, 255));

        run(&mut fader, &targets, FADE_WINDOW);

        assert_eq!(*fader.current(), OFF_FRAME);
        fader.set_immediate(&targets);
        assert_eq!(*fader.current(), OFF_FRAME);
    }
}
