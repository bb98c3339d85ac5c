#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub path: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Asset {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
