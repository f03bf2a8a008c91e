//! UART console input on ESP-IDF.
//!
//! Makes an ESP-IDF `UartDriver` a [`ByteSource`] so the dispatcher can poll
//! it from the main loop.
//!
//! # Hardware Setup
//!
//! ```text
//! PC Serial Monitor ──▶ USB-UART TX ──────▶ ESP32 RX pin
//!                       USB-UART RX ◀────── ESP32 TX pin (handler replies)
//! ```

use esp_idf_svc::hal::delay::NON_BLOCK;
use esp_idf_svc::hal::gpio;
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::hal::uart::{self, Uart, UartDriver};
use esp_idf_svc::sys::EspError;

use crate::source::ByteSource;

/// UART configuration for the console.
pub struct UartConsoleConfig {
    pub baud_rate: u32,
}

impl Default for UartConsoleConfig {
    fn default() -> Self {
        Self { baud_rate: 115200 }
    }
}

/// Open a UART for console use (no flow control).
pub fn open_console_uart<'d, U: Uart>(
    uart: impl Peripheral<P = U> + 'd,
    tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
    rx_pin: impl Peripheral<P = impl gpio::InputPin> + 'd,
    config: &UartConsoleConfig,
) -> Result<UartDriver<'d>, EspError> {
    let uart_config = uart::config::Config::default()
        .baudrate(esp_idf_svc::hal::units::Hertz(config.baud_rate));

    UartDriver::new(
        uart,
        tx_pin,
        rx_pin,
        Option::<gpio::AnyIOPin>::None, // CTS
        Option::<gpio::AnyIOPin>::None, // RTS
        &uart_config,
    )
}

impl ByteSource for UartDriver<'_> {
    fn available(&self) -> usize {
        match UartDriver::remaining_read(self) {
            Ok(n) => n,
            Err(err) => {
                log::warn!("uart rx level query failed: {}", err);
                0
            }
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        let mut byte = [0u8; 1];
        match UartDriver::read(self, &mut byte, NON_BLOCK) {
            Ok(1) => Some(byte[0]),
            Ok(_) => None,
            Err(err) => {
                log::warn!("uart read failed: {}", err);
                None
            }
        }
    }
}
