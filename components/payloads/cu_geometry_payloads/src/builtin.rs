use bincode::{Decode, Encode};
use cu29_clock::CuTime;
use serde::{Deserialize, Serialize};

/// Where and when a payload is valid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Header {
    /// Instant the payload is valid at.
    pub stamp: CuTime,
    /// Coordinate frame the payload is expressed in.
    pub frame_id: String,
}

impl Header {
    pub fn new(frame_id: impl Into<String>, stamp: CuTime) -> Self {
        Self {
            stamp,
            frame_id: frame_id.into(),
        }
    }
}

/// A payload paired with a frame id and a timestamp.
///
/// # Example
/// ```
/// use cu_geometry_payloads::{PointStamped, Point};
/// use cu29_clock::CuDuration;
///
/// let p = PointStamped::new(Point::new(1.0, 2.0, 3.0), "base_link", CuDuration(42));
/// assert_eq!(p.header.frame_id, "base_link");
/// assert_eq!(p.header.stamp, CuDuration(42));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Stamped<P> {
    pub header: Header,
    pub payload: P,
}

impl<P> Stamped<P> {
    pub fn new(payload: P, frame_id: impl Into<String>, stamp: CuTime) -> Self {
        Self {
            header: Header::new(frame_id, stamp),
            payload,
        }
    }

    pub fn from_parts(header: Header, payload: P) -> Self {
        Self { header, payload }
    }

    pub fn into_payload(self) -> P {
        self.payload
    }
}
