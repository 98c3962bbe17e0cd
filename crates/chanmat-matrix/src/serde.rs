use crate::matrix::{ChannelMatrix, MatrixDtype, MatrixSize};

use serde::ser::SerializeStruct;
use serde::Deserialize;

impl<T> serde::Serialize for ChannelMatrix<T>
where
    T: MatrixDtype + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ChannelMatrix", 4)?;
        state.serialize_field("data", self.as_slice())?;
        state.serialize_field("rows", &self.nrows())?;
        state.serialize_field("cols", &self.ncols())?;
        state.serialize_field("channels", &self.nchannels())?;
        state.end()
    }
}

impl<'de, T> serde::Deserialize<'de> for ChannelMatrix<T>
where
    T: MatrixDtype + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct MatrixData<T> {
            data: Vec<T>,
            rows: usize,
            cols: usize,
            channels: usize,
        }

        let MatrixData {
            data,
            rows,
            cols,
            channels,
        } = MatrixData::deserialize(deserializer)?;

        ChannelMatrix::new(MatrixSize { rows, cols }, channels, data)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde() -> Result<(), Box<dyn std::error::Error>> {
        let data = vec![1u8, 2, 3, 4, 5, 6];
        let mat = ChannelMatrix::new(MatrixSize { rows: 3, cols: 1 }, 2, data)?;
        let serialized = serde_json::to_string(&mat)?;
        let deserialized: ChannelMatrix<u8> = serde_json::from_str(&serialized)?;
        assert_eq!(mat, deserialized);
        Ok(())
    }

    #[test]
    fn test_serde_invalid_length() {
        let json = r#"{"data":[1,2,3],"rows":2,"cols":2,"channels":1}"#;
        let res = serde_json::from_str::<ChannelMatrix<u8>>(json);
        assert!(res.is_err());
    }
}
