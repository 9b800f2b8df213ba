#![no_main]
#![no_std]

use prop_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0, EXTI1])]
mod app {
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use prop_control::Store;
    use prop_firmware::installation;
    use prop_firmware::system::inputs::Inputs;
    use prop_firmware::system::player::Player;
    use prop_firmware::system::randomizer::Randomizer;
    use prop_firmware::system::status::StatusLed;
    use prop_firmware::system::strip::Strip;
    use prop_firmware::system::System;

    // Period of the control loop in milliseconds.
    const CONTROL_PERIOD: u64 = 1;

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        store: Store,
        inputs: Inputs,
        player: Player,
        strip: Strip,
        status_led: StatusLed,
        randomizer: Randomizer,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let config = installation::config();
        let system = System::init(cx.core, cx.device, &config);
        let mono = system.mono;
        let mut inputs = system.inputs;

        let store = match Store::new(&config, &mut inputs, 0) {
            Ok(store) => store,
            Err(error) => defmt::panic!("Invalid configuration: {}", error),
        };

        control::spawn().unwrap();

        (
            Shared {},
            Local {
                store,
                inputs,
                player: system.player,
                strip: system.strip,
                status_led: system.status_led,
                randomizer: system.randomizer,
            },
            init::Monotonics(mono),
        )
    }

    #[task(local = [store, inputs, player, strip, status_led, randomizer])]
    fn control(cx: control::Context) {
        control::spawn_after(CONTROL_PERIOD.millis()).unwrap();

        #[allow(clippy::cast_possible_truncation)]
        let now = monotonics::now().ticks() as u32;

        cx.local.player.boot(now);

        // Status frames of the audio module are not read, the busy line
        // carries the playback state.
        let reaction = cx
            .local
            .store
            .tick(cx.local.inputs, now, None, cx.local.randomizer);
        reaction.dispatch(cx.local.player, cx.local.strip, cx.local.status_led);
    }
}
