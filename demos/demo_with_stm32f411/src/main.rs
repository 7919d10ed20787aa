//! Drive LCD1602 with a STM32F411RET6 in 4 Pin Mode
//!
//! Goes through every operation of the driver once, a few seconds each.

//! Wiring diagram
//!
//! LCD1602 <-> STM32F411RET6
//!     Vss <-> GND
//!     Vdd <-> 5V (It is best to use an external source for the 5V pin, such as the 5V output from a DAPLink device or USB.)
//!      V0 <-> potentiometer <-> 5V & GND (to adjust the display contrast)
//!      RS <-> PA0
//!      RW <-> GND
//!      EN <-> PA2 (and optionally connect to a 4.7 kOhm Pulldown resistor, to stable voltage level when STM32 reset)
//!      D4 <-> PA3
//!      D5 <-> PA4
//!      D6 <-> PA5
//!      D7 <-> PA6
//!       A <-> 5V
//!       K <-> GND

#![no_std]
#![no_main]

use core::fmt::Write;

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{pac, prelude::*};

use lcd16x2_driver::{
    lcd::{Config, Lcd},
    sender::ParallelSender,
};

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(12.MHz()).freeze();

    let mut delayer = cp.SYST.delay(&clocks);

    // init needed digital pins

    let gpioa = dp.GPIOA.split();

    // Push-pull mode for a fast interaction, nothing is read back
    let rs_pin = gpioa.pa0.into_push_pull_output().erase();
    let en_pin = gpioa.pa2.into_push_pull_output().erase();

    let db4_pin = gpioa.pa3.into_push_pull_output().erase();
    let db5_pin = gpioa.pa4.into_push_pull_output().erase();
    let db6_pin = gpioa.pa5.into_push_pull_output().erase();
    let db7_pin = gpioa.pa6.into_push_pull_output().erase();

    // put pins together
    let mut sender = ParallelSender::new_4pin(rs_pin, en_pin, db4_pin, db5_pin, db6_pin, db7_pin);

    // init LCD1602
    let mut lcd = match Lcd::new(&mut sender, &mut delayer, Config::default()) {
        Ok(lcd) => lcd,
        Err(e) => panic!("LCD config rejected: {}", e),
    };
    rprintln!("LCD ready");

    lcd.write_string("hello,");
    lcd.set_cursor(0, 1);
    lcd.write_string("world!");
    lcd.delay_ms(2_000);

    lcd.cursor_on();
    lcd.blink_on();
    lcd.set_cursor(15, 0);
    lcd.delay_ms(2_000);
    lcd.blink_off();
    lcd.cursor_off();

    // numbers
    lcd.clear();
    lcd.write_int(-2061);
    lcd.set_cursor(0, 1);
    lcd.write_float(3.14159);
    lcd.delay_ms(2_000);

    // formatted text through core::fmt::Write
    lcd.clear();
    let _ = write!(lcd, "{}x{} cells", 16, 2);
    lcd.delay_ms(2_000);

    // right to left writing
    lcd.clear();
    lcd.right_to_left();
    lcd.set_cursor(15, 0);
    lcd.write_string("olleh");
    lcd.left_to_right();
    lcd.delay_ms(2_000);

    // autoscroll pushes text out to the left
    lcd.clear();
    lcd.set_cursor(16, 0);
    lcd.autoscroll_on();
    "scrolling".chars().for_each(|char| {
        lcd.write_char(char);
        lcd.delay_ms(300);
    });
    lcd.autoscroll_off();
    lcd.home();

    // shift display window around
    lcd.clear();
    lcd.write_str_at("<->", (6, 0));
    for _ in 0..4 {
        lcd.shift_right();
        lcd.delay_ms(250);
    }
    for _ in 0..4 {
        lcd.shift_left();
        lcd.delay_ms(250);
    }

    // and blinking display 3 times
    for _ in 0..6 {
        lcd.delay_ms(500);
        lcd.toggle_display();
    }

    rprintln!("demo done");

    #[allow(clippy::empty_loop)]
    loop {}
}
