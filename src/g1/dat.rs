//! The G1 binary container (DAT): magic + level count, then one record per
//! level with typed optional-field sections. Byte-oriented, one `Cursor`
//! pass per level — same shape as the teacher's `Loader::load_room_mdb`.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::collections::HashMap;
use std::io::Cursor;

use crate::{Error, Limits};

use super::cell::Cell;
use super::level::{Coord, Level, HEIGHT, WIDTH};
use super::levelset::LevelSet;
use super::rle;
use super::tile::Tile1;

const MAGIC_CANONICAL: [u8; 4] = [0xAC, 0xAA, 0x02, 0x00];
const MAGIC_HISTORICAL: [u8; 4] = [0xAC, 0xAA, 0x02, 0x01];

const FIELD_TITLE: u8 = 3;
const FIELD_TRAPS: u8 = 4;
const FIELD_CLONERS: u8 = 5;
const FIELD_PASSWORD: u8 = 6;
const FIELD_HINT: u8 = 7;
const FIELD_ALT_PASSWORD_PLAIN: u8 = 8;
const FIELD_MOVEMENT: u8 = 10;
const FIELD_AUTHOR: u8 = 11;

const PASSWORD_XOR: u8 = 0x99;

fn obfuscate(bytes: &mut [u8]) {
    for b in bytes.iter_mut() {
        *b ^= PASSWORD_XOR;
    }
}

fn nul_terminated_string(payload: &[u8]) -> String {
    payload
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| b as char)
        .collect()
}

fn push_nul_terminated_field(out: &mut Vec<u8>, field_id: u8, s: &str) -> Result<(), Error> {
    let mut payload: Vec<u8> = s.bytes().collect();
    payload.push(0);
    push_field(out, field_id, &payload)
}

fn push_field(out: &mut Vec<u8>, field_id: u8, payload: &[u8]) -> Result<(), Error> {
    if payload.len() > u8::MAX as usize {
        return Err(Error::BadFieldLength {
            field_id,
            len: payload.len(),
        });
    }
    out.push(field_id);
    out.push(payload.len() as u8);
    out.extend_from_slice(payload);
    Ok(())
}

fn sorted_wires(map: &HashMap<Coord, Coord>) -> Vec<(Coord, Coord)> {
    let mut v: Vec<(Coord, Coord)> = map.iter().map(|(&a, &b)| (a, b)).collect();
    v.sort_by_key(|(a, _)| (a.y, a.x));
    v
}

fn encode_layers(cells: &[Cell]) -> (Vec<u8>, Vec<u8>) {
    let top: Vec<u8> = cells.iter().map(|c| c.top.code()).collect();
    let bottom: Vec<u8> = cells.iter().map(|c| c.bottom.code()).collect();
    (top, bottom)
}

fn write_level_record(level: &Level, level_number: u16) -> Result<Vec<u8>, Error> {
    let mut body = Vec::new();
    body.write_u16::<LittleEndian>(level_number).unwrap();
    body.write_u16::<LittleEndian>(level.time).unwrap();
    body.write_u16::<LittleEndian>(level.chips).unwrap();
    body.write_u16::<LittleEndian>(1).unwrap(); // map-detail

    let (top, bottom) = encode_layers(level.raw_cells());
    let top_compressed = rle::encode(&top)?;
    let bottom_compressed = rle::encode(&bottom)?;

    body.write_u16::<LittleEndian>(top_compressed.len() as u16)
        .unwrap();
    body.extend_from_slice(&top_compressed);
    body.write_u16::<LittleEndian>(bottom_compressed.len() as u16)
        .unwrap();
    body.extend_from_slice(&bottom_compressed);

    let mut fields = Vec::new();
    push_nul_terminated_field(&mut fields, FIELD_TITLE, &level.title)?;

    if !level.traps.is_empty() {
        let mut payload = Vec::new();
        for (button, trap) in sorted_wires(&level.traps) {
            payload.write_u16::<LittleEndian>(button.x as u16).unwrap();
            payload.write_u16::<LittleEndian>(button.y as u16).unwrap();
            payload.write_u16::<LittleEndian>(trap.x as u16).unwrap();
            payload.write_u16::<LittleEndian>(trap.y as u16).unwrap();
            payload.extend_from_slice(&[0, 0]); // padding
        }
        push_field(&mut fields, FIELD_TRAPS, &payload)?;
    }
    if !level.cloners.is_empty() {
        let mut payload = Vec::new();
        for (button, cloner) in sorted_wires(&level.cloners) {
            payload.write_u16::<LittleEndian>(button.x as u16).unwrap();
            payload.write_u16::<LittleEndian>(button.y as u16).unwrap();
            payload.write_u16::<LittleEndian>(cloner.x as u16).unwrap();
            payload.write_u16::<LittleEndian>(cloner.y as u16).unwrap();
        }
        push_field(&mut fields, FIELD_CLONERS, &payload)?;
    }

    let mut password_payload: Vec<u8> = level.password.to_vec();
    password_payload.push(0);
    obfuscate(&mut password_payload);
    push_field(&mut fields, FIELD_PASSWORD, &password_payload)?;

    if let Some(hint) = &level.hint {
        push_nul_terminated_field(&mut fields, FIELD_HINT, hint)?;
    }
    if !level.movement.is_empty() {
        let mut payload = Vec::new();
        for c in &level.movement {
            payload.push(c.x);
            payload.push(c.y);
        }
        push_field(&mut fields, FIELD_MOVEMENT, &payload)?;
    }
    if let Some(author) = &level.author {
        push_nul_terminated_field(&mut fields, FIELD_AUTHOR, author)?;
    }

    body.write_u16::<LittleEndian>(fields.len() as u16)
        .unwrap();
    body.extend_from_slice(&fields);

    let mut record = Vec::with_capacity(body.len() + 2);
    record
        .write_u16::<LittleEndian>(body.len() as u16)
        .unwrap();
    record.extend_from_slice(&body);
    Ok(record)
}

pub fn write_dat(levelset: &LevelSet) -> Result<Vec<u8>, Error> {
    for level in &levelset.levels {
        if !level.is_valid() {
            return Err(Error::InvariantViolated {
                reason: "level fails is_valid()".to_string(),
            });
        }
    }

    let mut out = Vec::new();
    out.extend_from_slice(&MAGIC_CANONICAL);
    out.write_u16::<LittleEndian>(levelset.levels.len() as u16)
        .unwrap();

    for (i, level) in levelset.levels.iter().enumerate() {
        let record = write_level_record(level, (i + 1) as u16)?;
        out.extend_from_slice(&record);
    }
    Ok(out)
}

fn read_fields(payload: &[u8]) -> Result<
    (
        String,
        HashMap<Coord, Coord>,
        HashMap<Coord, Coord>,
        [u8; 4],
        Option<String>,
        Vec<Coord>,
        Option<String>,
    ),
    Error,
> {
    let mut title = String::new();
    let mut traps = HashMap::new();
    let mut cloners = HashMap::new();
    let mut password = *b"AAAA";
    let mut hint = None;
    let mut movement = Vec::new();
    let mut author = None;

    let mut i = 0;
    while i < payload.len() {
        if i + 2 > payload.len() {
            return Err(Error::Truncated {
                needed: 2,
                available: payload.len() - i,
            });
        }
        let field_id = payload[i];
        let len = payload[i + 1] as usize;
        i += 2;
        if i + len > payload.len() {
            return Err(Error::BadFieldLength { field_id, len });
        }
        let field_payload = &payload[i..i + len];
        i += len;

        match field_id {
            FIELD_TITLE => title = nul_terminated_string(field_payload),
            FIELD_TRAPS => {
                if len % 10 != 0 {
                    return Err(Error::BadFieldLength { field_id, len });
                }
                for chunk in field_payload.chunks(10) {
                    let bx = u16::from_le_bytes([chunk[0], chunk[1]]);
                    let by = u16::from_le_bytes([chunk[2], chunk[3]]);
                    let tx = u16::from_le_bytes([chunk[4], chunk[5]]);
                    let ty = u16::from_le_bytes([chunk[6], chunk[7]]);
                    traps.insert(
                        Coord::new(bx as u8, by as u8),
                        Coord::new(tx as u8, ty as u8),
                    );
                }
            }
            FIELD_CLONERS => {
                if len % 8 != 0 {
                    return Err(Error::BadFieldLength { field_id, len });
                }
                for chunk in field_payload.chunks(8) {
                    let bx = u16::from_le_bytes([chunk[0], chunk[1]]);
                    let by = u16::from_le_bytes([chunk[2], chunk[3]]);
                    let cx = u16::from_le_bytes([chunk[4], chunk[5]]);
                    let cy = u16::from_le_bytes([chunk[6], chunk[7]]);
                    cloners.insert(
                        Coord::new(bx as u8, by as u8),
                        Coord::new(cx as u8, cy as u8),
                    );
                }
            }
            FIELD_PASSWORD => {
                let mut buf = field_payload.to_vec();
                obfuscate(&mut buf);
                for i in 0..4 {
                    password[i] = *buf.get(i).unwrap_or(&b' ');
                }
            }
            FIELD_HINT => hint = Some(nul_terminated_string(field_payload)),
            FIELD_ALT_PASSWORD_PLAIN => {} // superseded by FIELD_PASSWORD; kept for round-trip tolerance
            FIELD_MOVEMENT => {
                if len % 2 != 0 {
                    return Err(Error::BadFieldLength { field_id, len });
                }
                for chunk in field_payload.chunks(2) {
                    movement.push(Coord::new(chunk[0], chunk[1]));
                }
            }
            FIELD_AUTHOR => author = Some(nul_terminated_string(field_payload)),
            _ => {} // unknown field ids are ignored, not rejected
        }
    }

    Ok((title, traps, cloners, password, hint, movement, author))
}

fn read_level_record(data: &[u8], limits: Limits) -> Result<(Level, usize), Error> {
    let mut r = Cursor::new(data);
    let record_len = r.read_u16::<LittleEndian>().map_err(|_| Error::Truncated {
        needed: 2,
        available: data.len(),
    })? as usize;
    limits.check(record_len)?;

    let body_start = 2;
    if body_start + record_len > data.len() {
        return Err(Error::Truncated {
            needed: record_len,
            available: data.len() - body_start,
        });
    }
    let body = &data[body_start..body_start + record_len];
    let mut r = Cursor::new(body);

    let _level_number = r.read_u16::<LittleEndian>()?;
    let time = r.read_u16::<LittleEndian>()?;
    let chips = r.read_u16::<LittleEndian>()?;
    let _map_detail = r.read_u16::<LittleEndian>()?;

    let top_len = r.read_u16::<LittleEndian>()? as usize;
    limits.check(top_len)?;
    let pos = r.position() as usize;
    if pos + top_len > body.len() {
        return Err(Error::Truncated {
            needed: top_len,
            available: body.len() - pos,
        });
    }
    let top_compressed = &body[pos..pos + top_len];
    r.set_position((pos + top_len) as u64);
    let top_bytes = rle::decode(top_compressed)?;

    let bottom_len = r.read_u16::<LittleEndian>()? as usize;
    limits.check(bottom_len)?;
    let pos = r.position() as usize;
    if pos + bottom_len > body.len() {
        return Err(Error::Truncated {
            needed: bottom_len,
            available: body.len() - pos,
        });
    }
    let bottom_compressed = &body[pos..pos + bottom_len];
    r.set_position((pos + bottom_len) as u64);
    let bottom_bytes = rle::decode(bottom_compressed)?;

    let opt_len = r.read_u16::<LittleEndian>()? as usize;
    limits.check(opt_len)?;
    let pos = r.position() as usize;
    if pos + opt_len > body.len() {
        return Err(Error::Truncated {
            needed: opt_len,
            available: body.len() - pos,
        });
    }
    let opt_bytes = &body[pos..pos + opt_len];

    let (title, traps, cloners, password, hint, movement, author) = read_fields(opt_bytes)?;

    let mut cells = Vec::with_capacity(WIDTH * HEIGHT);
    for (&t, &b) in top_bytes.iter().zip(bottom_bytes.iter()) {
        let top = Tile1::from_code(t).ok_or(Error::InvalidTileCode { code: t as u16 })?;
        let bottom = Tile1::from_code(b).ok_or(Error::InvalidTileCode { code: b as u16 })?;
        cells.push(Cell::new(top, bottom));
    }

    let level = Level::from_raw_parts(
        title, chips, time, password, hint, author, cells, movement, traps, cloners,
    );

    Ok((level, body_start + record_len))
}

pub fn read_dat(data: &[u8], limits: Limits) -> Result<LevelSet, Error> {
    if data.len() < 6 {
        return Err(Error::Truncated {
            needed: 6,
            available: data.len(),
        });
    }
    let mut magic = [0u8; 4];
    magic.copy_from_slice(&data[0..4]);
    if magic != MAGIC_CANONICAL && magic != MAGIC_HISTORICAL {
        return Err(Error::BadMagic { found: magic });
    }

    let mut r = Cursor::new(&data[4..6]);
    let count = r.read_u16::<LittleEndian>()? as usize;

    let mut levels = Vec::with_capacity(count);
    let mut offset = 6;
    for _ in 0..count {
        let (level, consumed) = read_level_record(&data[offset..], limits)?;
        levels.push(level);
        offset += consumed;
    }

    Ok(LevelSet::new(levels))
}
