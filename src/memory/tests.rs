use crate::error::{Error, Space};
use crate::memory::Memory;

#[test]
fn memory_starts_zeroed() {
    let mem: Memory<u16, u8> = Memory::new(256);

    assert_eq!(mem.size(), 256);
    assert!(mem.as_slice().iter().all(|b| *b == 0));
}

#[test]
fn memory_read_write() {
    let mut mem: Memory<u16, u8> = Memory::new(256);

    mem.write(0x00, 0x12).unwrap();
    mem.write(0xFF, 0x34).unwrap();

    assert_eq!(mem.read(0x00).unwrap(), 0x12);
    assert_eq!(mem.read(0xFF).unwrap(), 0x34);
    assert_eq!(mem.read(0x80).unwrap(), 0x00);
}

#[test]
fn memory_out_of_range() {
    let mut mem: Memory<u16, u8> = Memory::new(256);

    assert!(matches!(
        mem.read(0x100),
        Err(Error::OutOfRange {
            space: Space::Memory,
            index: 0x100,
            capacity: 256
        })
    ));
    assert!(matches!(
        mem.write(0x1FF, 1),
        Err(Error::OutOfRange {
            space: Space::Memory,
            ..
        })
    ));
}

#[test]
fn memory_load_image() {
    let mut mem: Memory<u16, u8> = Memory::new(256);

    mem.load_image(0x10, &[1, 2, 3]).unwrap();

    assert_eq!(mem.read(0x0F).unwrap(), 0);
    assert_eq!(mem.read(0x10).unwrap(), 1);
    assert_eq!(mem.read(0x12).unwrap(), 3);
    assert_eq!(mem.read(0x13).unwrap(), 0);
}

#[test]
fn memory_load_image_too_large() {
    let mut mem: Memory<u16, u8> = Memory::new(4);

    assert!(matches!(
        mem.load_image(2, &[9, 9, 9]),
        Err(Error::OutOfRange { index: 4, .. })
    ));
    assert_eq!(mem.as_slice(), &[0, 0, 0, 0]);

    mem.load_image(0, &[1, 2, 3, 4]).unwrap();
    assert_eq!(mem.as_slice(), &[1, 2, 3, 4]);
}
