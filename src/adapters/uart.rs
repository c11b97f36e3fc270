//! UART transport adapter for the host link.
//!
//! - **`target_os = "espidf"`** — ESP-IDF UART driver on
//!   [`HOST_UART_PORT`](crate::pins::HOST_UART_PORT), 8N1, no flow
//!   control.  Reads never block.
//! - **`not(target_os = "espidf")`** — in-memory RX/TX buffers for
//!   host-side testing and simulation.

use crate::drivers::hw_init::HwInitError;
use crate::error::LinkError;
use crate::link::transport::Transport;

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(not(target_os = "espidf"))]
use std::collections::VecDeque;

use log::info;

/// Driver-side receive ring size (bytes).
#[cfg(target_os = "espidf")]
const RX_RING_SIZE: i32 = 512;

/// Ticks to wait for the TX FIFO to drain on flush.
#[cfg(target_os = "espidf")]
const TX_DONE_TICKS: TickType_t = 100;

#[cfg(target_os = "espidf")]
const PIN_NO_CHANGE: i32 = -1;

pub struct UartTransport {
    #[cfg(target_os = "espidf")]
    port: uart_port_t,

    #[cfg(not(target_os = "espidf"))]
    rx: VecDeque<u8>,
    #[cfg(not(target_os = "espidf"))]
    tx: Vec<u8>,
}

impl UartTransport {
    /// Install the UART driver and configure pins and baud rate.
    #[cfg(target_os = "espidf")]
    pub fn open(port: i32, tx_gpio: i32, rx_gpio: i32, baud: u32) -> Result<Self, HwInitError> {
        let cfg = uart_config_t {
            baud_rate: baud as i32,
            data_bits: uart_word_length_t_UART_DATA_8_BITS,
            parity: uart_parity_t_UART_PARITY_DISABLE,
            stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
            flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
            ..Default::default()
        };

        // SAFETY: called once from main() before the loop; the port is not
        // shared with the console logger.
        unsafe {
            let ret = uart_param_config(port, &cfg);
            if ret != ESP_OK as i32 { return Err(HwInitError::UartInitFailed(ret)); }

            let ret = uart_set_pin(port, tx_gpio, rx_gpio, PIN_NO_CHANGE, PIN_NO_CHANGE);
            if ret != ESP_OK as i32 { return Err(HwInitError::UartInitFailed(ret)); }

            let ret = uart_driver_install(port, RX_RING_SIZE, 0, 0, core::ptr::null_mut(), 0);
            if ret != ESP_OK as i32 { return Err(HwInitError::UartInitFailed(ret)); }
        }

        info!("UART{}: host link open at {} baud (tx={}, rx={})", port, baud, tx_gpio, rx_gpio);
        Ok(Self { port })
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn open(port: i32, tx_gpio: i32, rx_gpio: i32, baud: u32) -> Result<Self, HwInitError> {
        info!("UART{}(sim): host link at {} baud (tx={}, rx={})", port, baud, tx_gpio, rx_gpio);
        Ok(Self {
            rx: VecDeque::new(),
            tx: Vec::new(),
        })
    }

    /// Queue bytes as if the host had sent them.
    #[cfg(not(target_os = "espidf"))]
    pub fn sim_inject_rx(&mut self, data: &[u8]) {
        self.rx.extend(data);
    }

    /// Drain everything written so far.
    #[cfg(not(target_os = "espidf"))]
    pub fn sim_take_tx(&mut self) -> Vec<u8> {
        core::mem::take(&mut self.tx)
    }
}

#[cfg(target_os = "espidf")]
impl Transport for UartTransport {
    type Error = LinkError;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, LinkError> {
        // SAFETY: buf is a valid writable region of buf.len() bytes; zero
        // ticks to wait makes the call non-blocking.
        let n = unsafe { uart_read_bytes(self.port, buf.as_mut_ptr().cast(), buf.len() as u32, 0) };
        if n < 0 {
            return Err(LinkError::ReadFailed);
        }
        Ok(n as usize)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, LinkError> {
        // SAFETY: data is a valid readable region of data.len() bytes.
        let n = unsafe { uart_write_bytes(self.port, data.as_ptr().cast(), data.len()) };
        if n < 0 {
            return Err(LinkError::WriteFailed);
        }
        Ok(n as usize)
    }

    fn flush(&mut self) -> Result<(), LinkError> {
        // SAFETY: port was installed in open().
        let ret = unsafe { uart_wait_tx_done(self.port, TX_DONE_TICKS) };
        if ret != ESP_OK as i32 {
            return Err(LinkError::WriteFailed);
        }
        Ok(())
    }

    fn available(&self) -> bool {
        let mut len: usize = 0;
        // SAFETY: len is a valid out-pointer; read-only driver query.
        let ret = unsafe { uart_get_buffered_data_len(self.port, &mut len) };
        ret == ESP_OK as i32 && len > 0
    }
}

#[cfg(not(target_os = "espidf"))]
impl Transport for UartTransport {
    type Error = LinkError;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, LinkError> {
        let n = buf.len().min(self.rx.len());
        for (slot, byte) in buf.iter_mut().zip(self.rx.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, LinkError> {
        self.tx.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<(), LinkError> {
        Ok(())
    }

    fn available(&self) -> bool {
        !self.rx.is_empty()
    }
}
