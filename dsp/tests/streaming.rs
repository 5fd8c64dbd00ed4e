use wavelut_dsp::{build_luts, FunctionType, GeneratorConfig, Output, State};

#[test]
fn exp_stream_of_eight() {
    let mut stepper = GeneratorConfig::new(8, FunctionType::Exp).build().unwrap();
    let luts = build_luts(8);

    for tick in 1..=16 {
        let index = (tick - 1) % 8;
        let out = stepper.tick(false);
        assert_eq!(out.real, luts.cos()[index], "tick {}", tick);
        assert_eq!(out.imag, luts.sin()[index], "tick {}", tick);
        assert!(out.valid, "tick {}", tick);
        assert_eq!(out.last, tick % 8 == 0, "tick {}", tick);
    }
    assert_eq!(stepper.index(), 0);
}

#[test]
fn eight_entry_tables() {
    // One full period per entry: cos sits at full scale, sin and sinc at zero.
    let luts = build_luts(8);
    assert_eq!(luts.cos(), &[32767; 8]);
    assert_eq!(luts.sin(), &[0; 8]);
    assert_eq!(luts.sinc(), &[0; 8]);
    assert_eq!(luts.rect(), &[0, 0, 32767, 32767, 32767, 32767, 32767, 0]);
}

#[test]
fn rect_stream_with_reset_mid_table() {
    let mut stepper = GeneratorConfig::new(8, FunctionType::Rect).build().unwrap();

    let reals: Vec<i16> = (0..4).map(|_| stepper.tick(false).real).collect();
    assert_eq!(reals, [0, 0, 32767, 32767]);

    assert_eq!(stepper.tick(true), Output::default());
    assert_eq!(stepper.state(), State::Reset);

    let outputs: Vec<Output> = (0..8).map(|_| stepper.tick(false)).collect();
    let reals: Vec<i16> = outputs.iter().map(|out| out.real).collect();
    assert_eq!(reals, [0, 0, 32767, 32767, 32767, 32767, 32767, 0]);
    assert!(outputs.iter().all(|out| out.real == out.imag));
    assert_eq!(
        outputs.iter().position(|out| out.last),
        Some(7),
        "last flags the wrap after a reset"
    );
    assert_eq!(stepper.state(), State::Running);
}

#[test]
fn sinc_stream_is_symmetric_around_center() {
    let size = 1024;
    let mut stepper = GeneratorConfig::new(size, FunctionType::Sinc).build().unwrap();
    let mut buffer = vec![Output::default(); size];
    stepper.fill(&mut buffer);

    assert_eq!(buffer[0].real, 0);
    assert_eq!(buffer[size / 2].real, 0);
    for offset in 1..size / 2 {
        let below = buffer[size / 2 - offset].real;
        let above = buffer[size / 2 + offset].real;
        assert!(
            (below as i32 - above as i32).abs() <= 1,
            "offset {}: {} vs {}",
            offset,
            below,
            above
        );
    }
    assert!(buffer[size - 1].last);
}
