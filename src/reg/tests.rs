use crate::error::{Error, Space};
use crate::reg::RegisterFile;

#[test]
fn register_file_starts_zeroed() {
    let regs: RegisterFile<u8> = RegisterFile::new(8);

    assert_eq!(regs.count(), 8);
    assert!(regs.iter().all(|v| *v == 0));
}

#[test]
fn register_file_get_set() {
    let mut regs: RegisterFile<u8> = RegisterFile::new(8);

    regs.set(0, 42).unwrap();
    regs.set(7, 0xF4).unwrap();

    assert_eq!(regs.get(0).unwrap(), 42);
    assert_eq!(regs.get(7).unwrap(), 0xF4);
    assert_eq!(regs.get(3).unwrap(), 0);
}

#[test]
fn register_file_out_of_range() {
    let mut regs: RegisterFile<u8> = RegisterFile::new(8);

    assert!(matches!(
        regs.get(8),
        Err(Error::OutOfRange {
            space: Space::Register,
            index: 8,
            capacity: 8
        })
    ));
    assert!(matches!(
        regs.set(0xFF, 1),
        Err(Error::OutOfRange {
            space: Space::Register,
            index: 0xFF,
            ..
        })
    ));
}

#[test]
fn register_file_hex() {
    let mut regs: RegisterFile<u8> = RegisterFile::new(4);

    regs.set(1, 0xA).unwrap();
    regs.set(3, 0xF4).unwrap();

    assert_eq!(format!("{:X}", regs), "00 0A 00 F4");
}

#[test]
fn register_file_from_values() {
    let regs = RegisterFile::from(vec![1u8, 2, 3]);

    assert_eq!(regs.count(), 3);
    assert_eq!(regs.get(2).unwrap(), 3);
    assert!(regs.get(3).is_err());
}
