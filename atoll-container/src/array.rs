use crate::value::{DataType, Datum};

/// Dense typed vector of dataset elements, stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayData {
    Int32(Vec<i32>),
    Int64(Vec<i64>),
    UInt16(Vec<u16>),
    UInt64(Vec<u64>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

impl ArrayData {
    pub fn data_type(&self) -> DataType {
        match self {
            ArrayData::Int32(_) => DataType::Int32,
            ArrayData::Int64(_) => DataType::Int64,
            ArrayData::UInt16(_) => DataType::UInt16,
            ArrayData::UInt64(_) => DataType::UInt64,
            ArrayData::Float32(_) => DataType::Float32,
            ArrayData::Float64(_) => DataType::Float64,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ArrayData::Int32(v) => v.len(),
            ArrayData::Int64(v) => v.len(),
            ArrayData::UInt16(v) => v.len(),
            ArrayData::UInt64(v) => v.len(),
            ArrayData::Float32(v) => v.len(),
            ArrayData::Float64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at flat (row-major) index `i`.
    pub fn get(&self, i: usize) -> Option<Datum> {
        match self {
            ArrayData::Int32(v) => v.get(i).map(|v| Datum::Int32(*v)),
            ArrayData::Int64(v) => v.get(i).map(|v| Datum::Int64(*v)),
            ArrayData::UInt16(v) => v.get(i).map(|v| Datum::UInt16(*v)),
            ArrayData::UInt64(v) => v.get(i).map(|v| Datum::UInt64(*v)),
            ArrayData::Float32(v) => v.get(i).map(|v| Datum::Float32(*v)),
            ArrayData::Float64(v) => v.get(i).map(|v| Datum::Float64(*v)),
        }
    }

    /// Little-endian encoding of elements `[start, start + count)`.
    pub fn encode_range(&self, start: usize, count: usize) -> Vec<u8> {
        let width = self
            .data_type()
            .byte_width()
            .expect("numeric arrays have a fixed width") as usize;
        let mut out = Vec::with_capacity(count * width);
        for i in start..start + count {
            if let Some(datum) = self.get(i) {
                datum.encode(&mut out);
            }
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = Datum> + '_ {
        (0..self.len()).map(move |i| self.get(i).expect("index in range"))
    }
}

impl From<Vec<i32>> for ArrayData {
    fn from(v: Vec<i32>) -> Self {
        ArrayData::Int32(v)
    }
}

impl From<Vec<i64>> for ArrayData {
    fn from(v: Vec<i64>) -> Self {
        ArrayData::Int64(v)
    }
}

impl From<Vec<u16>> for ArrayData {
    fn from(v: Vec<u16>) -> Self {
        ArrayData::UInt16(v)
    }
}

impl From<Vec<u64>> for ArrayData {
    fn from(v: Vec<u64>) -> Self {
        ArrayData::UInt64(v)
    }
}

impl From<Vec<f32>> for ArrayData {
    fn from(v: Vec<f32>) -> Self {
        ArrayData::Float32(v)
    }
}

impl From<Vec<f64>> for ArrayData {
    fn from(v: Vec<f64>) -> Self {
        ArrayData::Float64(v)
    }
}
