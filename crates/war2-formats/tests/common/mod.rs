//! Synthetic archive and map builders shared by the integration tests

#![allow(dead_code)]

use war2_formats::pud::{UNIT_DATA_SIZE, UPGRADE_TABLE_SIZE};
use war2_formats::war::WAR_MAGIC;

/// Build an archive whose entries are laid out back to back after the header
pub fn war_archive(file_id: u16, entries: &[Vec<u8>]) -> Vec<u8> {
    let header_len = 8 + entries.len() * 4;
    let mut data = Vec::new();
    data.extend_from_slice(&WAR_MAGIC.to_le_bytes());
    data.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    data.extend_from_slice(&file_id.to_le_bytes());

    let mut offset = header_len as u32;
    for entry in entries {
        data.extend_from_slice(&offset.to_le_bytes());
        offset += entry.len() as u32;
    }
    for entry in entries {
        data.extend_from_slice(entry);
    }
    data
}

/// Tagged section builder
#[derive(Default)]
pub struct PudBuilder {
    data: Vec<u8>,
}

impl PudBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(mut self, tag: &[u8; 4], payload: &[u8]) -> Self {
        self.data.extend_from_slice(tag);
        self.data
            .extend_from_slice(&(payload.len() as u32).to_le_bytes());
        self.data.extend_from_slice(payload);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }
}

fn words(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn dwords(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// A complete 32x32 winter map with two placed units
///
/// `with_alow` controls whether an `ALOW` section is written.
pub fn sample_map(with_alow: bool) -> Vec<u8> {
    let mut type_payload = b"WAR2 MAP\0\0".to_vec();
    type_payload.extend_from_slice(&[0x0a, 0xff]);
    type_payload.extend_from_slice(&0x0000_beefu32.to_le_bytes());

    let mut description = [0u8; 32];
    description[..9].copy_from_slice(b"Test Isle");

    let mut owners = [0x03u8; 16];
    owners[0] = 0x05;
    owners[1] = 0x04;

    let mut sides = [0x02u8; 16];
    sides[0] = 0x00;
    sides[1] = 0x01;

    let mut udta = vec![0u8; UNIT_DATA_SIZE];
    udta[0] = 1;

    let mut ugrd = vec![0u8; UPGRADE_TABLE_SIZE];
    ugrd[0] = 1;

    let tiles: Vec<u16> = (0..32 * 32).map(|i| 0x0050 + (i % 16) as u16).collect();
    let movement = vec![0x0001u16; 32 * 32];
    let action = vec![0x4000u16; 32 * 32];

    let mut units = Vec::new();
    // footman for player 1 at (4, 5)
    units.extend_from_slice(&[4, 0, 5, 0, 0x00, 0x00, 1, 0]);
    // gold mine for neutral at (10, 10)
    units.extend_from_slice(&[10, 0, 10, 0, 0x5c, 0x0f, 40, 0]);

    let mut builder = PudBuilder::new()
        .section(b"TYPE", &type_payload)
        .section(b"VER ", &words(&[0x13]))
        .section(b"DESC", &description)
        .section(b"OWNR", &owners)
        .section(b"ERA ", &words(&[0]))
        .section(b"ERAX", &words(&[1]))
        .section(b"DIM ", &words(&[32, 32]))
        .section(b"UDTA", &udta);

    if with_alow {
        let mut alow = Vec::new();
        alow.extend(dwords(&[0x0000_0001; 16])); // units
        alow.extend(dwords(&[0; 16])); // spells at start
        alow.extend(dwords(&[0x0000_0003; 16])); // spells allowed
        alow.extend(dwords(&[0; 16])); // spells researching
        alow.extend(dwords(&[0x0001_0000; 16])); // upgrades allowed
        alow.extend(dwords(&[0; 16])); // upgrades researching
        builder = builder.section(b"ALOW", &alow);
    }

    builder
        .section(b"UGRD", &ugrd)
        .section(b"SIDE", &sides)
        .section(b"SGLD", &words(&[2000; 16]))
        .section(b"SLBR", &words(&[1000; 16]))
        .section(b"SOIL", &words(&[500; 16]))
        .section(b"AIPL", &[0u8; 16])
        .section(b"MTXM", &words(&tiles))
        .section(b"SQM ", &words(&movement))
        .section(b"OILM", &[0u8; 32 * 32])
        .section(b"REGM", &words(&action))
        .section(b"UNIT", &units)
        .build()
}
