//! Decodes byte sequences written by Qt's `QDataStream` (versions 19 and 20,
//! big-endian) and compares them with the values recorded next to them.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use cutestream::datastream::{ByteOrder, FloatingPointPrecision, ReaderBuilder, StreamReader};
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Deserialize)]
struct Sample<V> {
    serialized: String,
    value: V,
}

#[derive(Debug, Deserialize)]
struct DateValue {
    year: i64,
    month: u32,
    day: u32,
}

#[derive(Debug, Deserialize)]
struct TimeValue {
    hour: u32,
    minute: u32,
    sec: u32,
    ms: u32,
}

#[derive(Debug, Deserialize)]
struct DateTimeValue {
    #[serde(flatten)]
    date: DateValue,
    #[serde(flatten)]
    time: TimeValue,
}

/// Fixture file contents: version -> type name -> samples.
type Fixture<V> = BTreeMap<String, BTreeMap<String, Vec<Sample<V>>>>;

fn load<V: DeserializeOwned>(name: &str) -> Fixture<V> {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", name]
        .iter()
        .collect();
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("reading {}: {e}", path.display()));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("parsing {name}: {e}"))
}

fn reader(version: &str, serialized: &str) -> StreamReader<bytes::buf::Reader<bytes::Bytes>> {
    let data = STANDARD.decode(serialized).expect("fixture is valid base64");
    ReaderBuilder::new()
        .version(version.parse().expect("version key is numeric"))
        .build_from_bytes(data)
        .expect("fixture version is supported")
}

/// Asserts a reader consumed its whole fixture.
fn assert_drained(mut r: StreamReader<bytes::buf::Reader<bytes::Bytes>>, what: &str) {
    assert!(r.read_u8().unwrap_err().is_eof(), "{what}: trailing bytes");
}

fn read_integer(r: &mut StreamReader<bytes::buf::Reader<bytes::Bytes>>, ty: &str) -> String {
    match ty {
        "int8" => r.read_i8().unwrap().to_string(),
        "uint8" => r.read_u8().unwrap().to_string(),
        "int16" => r.read_i16().unwrap().to_string(),
        "uint16" => r.read_u16().unwrap().to_string(),
        "int32" => r.read_i32().unwrap().to_string(),
        "uint32" => r.read_u32().unwrap().to_string(),
        "int64" => r.read_i64().unwrap().to_string(),
        "uint64" => r.read_u64().unwrap().to_string(),
        other => panic!("unexpected fixture type {other}"),
    }
}

#[test]
fn integers() {
    let data: Fixture<String> = load("generated_int.json");
    assert_eq!(data.len(), 2);
    for (version, types) in &data {
        for (ty, samples) in types {
            assert!(!samples.is_empty());
            for s in samples {
                let mut r = reader(version, &s.serialized);
                assert_eq!(read_integer(&mut r, ty), s.value, "v{version} {ty}");
                assert_drained(r, ty);

                // A lone integer reversed is its little-endian encoding.
                let mut bytes = STANDARD.decode(&s.serialized).unwrap();
                bytes.reverse();
                let mut r = ReaderBuilder::new()
                    .byte_order(ByteOrder::LittleEndian)
                    .build_from_bytes(bytes)
                    .unwrap();
                assert_eq!(read_integer(&mut r, ty), s.value, "v{version} {ty} le");
                assert_drained(r, ty);
            }
        }
    }
}

#[test]
fn floats() {
    let data: Fixture<String> = load("generated_float.json");
    for (version, types) in &data {
        for (ty, samples) in types {
            for s in samples {
                let expected: f64 = s.value.parse().unwrap();
                let be_bytes = STANDARD.decode(&s.serialized).unwrap();
                let mut le_bytes = be_bytes.clone();
                le_bytes.reverse();
                let precision = match ty.as_str() {
                    "double_d" => FloatingPointPrecision::Double,
                    _ => FloatingPointPrecision::Single,
                };
                for (order, bytes) in [
                    (ByteOrder::BigEndian, &be_bytes),
                    (ByteOrder::LittleEndian, &le_bytes),
                ] {
                    let mut r = ReaderBuilder::new()
                        .version(version.parse().unwrap())
                        .byte_order(order)
                        .floating_point_precision(precision)
                        .build(&bytes[..])
                        .unwrap();
                    match ty.as_str() {
                        "float_s" => assert_eq!(r.read_float().unwrap(), expected as f32),
                        "double_s" | "double_d" => {
                            assert_eq!(r.read_double().unwrap(), expected)
                        }
                        other => panic!("unexpected fixture type {other}"),
                    }
                    assert!(r.read_u8().unwrap_err().is_eof(), "{ty} {order:?}: trailing bytes");
                }
            }
        }
    }
}

#[test]
fn uuids() {
    let data: Fixture<String> = load("generated_uuid.json");
    for (version, types) in &data {
        for s in &types["uuid"] {
            let mut r = reader(version, &s.serialized);
            assert_eq!(r.read_uuid().unwrap(), s.value);
            assert_drained(r, "uuid");
        }
    }
}

#[test]
fn dates() {
    let data: Fixture<DateValue> = load("generated_date.json");
    for (version, types) in &data {
        for s in &types["date"] {
            let mut r = reader(version, &s.serialized);
            let d = r.read_date().unwrap();
            assert_eq!((d.year, d.month, d.day), (s.value.year, s.value.month, s.value.day));
            assert_drained(r, "date");
        }
    }
}

#[test]
fn times() {
    let data: Fixture<TimeValue> = load("generated_time.json");
    for (version, types) in &data {
        for s in &types["time"] {
            let mut r = reader(version, &s.serialized);
            let t = r.read_time().unwrap();
            let v = &s.value;
            assert_eq!(
                (t.hour(), t.minute(), t.second(), t.msec()),
                (v.hour, v.minute, v.sec, v.ms)
            );
            assert_drained(r, "time");
        }
    }
}

#[test]
fn date_times() {
    let data: Fixture<DateTimeValue> = load("generated_datetime.json");
    for (version, types) in &data {
        for s in &types["datetime"] {
            let mut r = reader(version, &s.serialized);
            let dt = r.read_date_time().unwrap();
            let (d, t) = (&s.value.date, &s.value.time);
            assert_eq!((dt.date.year, dt.date.month, dt.date.day), (d.year, d.month, d.day));
            assert_eq!(
                (dt.time.hour(), dt.time.minute(), dt.time.second(), dt.time.msec()),
                (t.hour, t.minute, t.sec, t.ms)
            );
            assert_drained(r, "datetime");
        }
    }
}
