use std::sync::{Arc, Mutex, Once};
use std::thread;

use fpga_bus::constants::*;
use fpga_bus::gpio::sim::{RegisterFile, SimGpio};
use fpga_bus::registers::alu::{AluFlags, AluOp, Control};
use fpga_bus::registers::lookup;
use fpga_bus::{Bus, BusConfig, FpgaBus};

fn setup() -> FpgaBus<SimGpio<RegisterFile>> {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
    let config = BusConfig::default();
    FpgaBus::new(SimGpio::new(config.clone(), RegisterFile::new()), config).unwrap()
}

#[test]
fn cpu_data_loopback() {
    let mut bus = setup();
    bus.write_at(CPU_WDATA1, 0x5A);
    bus.gpio_mut().device_mut().loopback();
    assert_eq!(bus.read_at(CPU_RDATA1), 0x5A);
}

#[test]
fn loopback_by_register_name() {
    let mut bus = setup();
    let wdata = lookup("RAM_WDATA2").unwrap();
    let rdata = lookup("RAM_RDATA2").unwrap();
    bus.write_at(wdata, 0xC7);
    bus.gpio_mut().device_mut().loopback();
    assert_eq!(bus.read_at(rdata), 0xC7);
}

#[test]
fn alu_setup_sequence() {
    let mut bus = setup();
    bus.write_word_at(CPU_WDATA1, 0x0000_0007);
    bus.write_at(CPU_FUNCT, AluOp::Add.as_bits());
    bus.write_at(CPU_ENABLES, (Control::START | Control::EN_FLAGS).bits());

    let regs = bus.gpio().device();
    assert_eq!(regs.get(CPU_WDATA1), 7);
    assert_eq!(AluOp::from_bits(regs.get(CPU_FUNCT)), AluOp::Add);
    assert_eq!(regs.get(CPU_ENABLES), CTRL_START | CTRL_EN_FLAGS);

    bus.gpio_mut()
        .device_mut()
        .set(CPU_FLAGS, ALU_FLAG_SIGN | ALU_FLAG_BUSER);
    let flags = AluFlags::from_bits_truncate(bus.read_at(CPU_FLAGS));
    assert_eq!(flags, AluFlags::SIGN | AluFlags::BUSER);
}

#[test]
fn counter_reads_as_halfword() {
    let mut bus = setup();
    bus.gpio_mut().device_mut().set(COUNT_LSB, 0xCD);
    bus.gpio_mut().device_mut().set(COUNT_MSB, 0xAB);
    assert_eq!(bus.read_halfword_at(COUNT_LSB), 0xABCD);
}

#[test]
fn shared_across_threads_behind_mutex() {
    let bus = Arc::new(Mutex::new(setup()));
    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let bus = Arc::clone(&bus);
            thread::spawn(move || {
                let mut bus = bus.lock().unwrap();
                bus.write_at(RAM_WDATA1 + i, 0x10 + i);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    let mut bus = bus.lock().unwrap();
    bus.gpio_mut().device_mut().loopback();
    assert_eq!(bus.read_word_at(RAM_RDATA1), 0x1312_1110);
    assert!(!bus.gpio().strobes_overlapped());
}
