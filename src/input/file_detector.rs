//! File type detection

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Word,
    Text,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" | "doc" => FileType::Word,
            _ => FileType::Text,
        }
    }

    /// Detect from a document name by its case-insensitive suffix.
    /// Names without a recognised suffix are read as text.
    pub fn from_name(name: &str) -> Self {
        match name.rsplit_once('.') {
            Some((_, ext)) => Self::from_extension(ext),
            None => FileType::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_is_case_insensitive() {
        assert_eq!(FileType::from_name("cv.PDF"), FileType::Pdf);
        assert_eq!(FileType::from_name("cv.Docx"), FileType::Word);
        assert_eq!(FileType::from_name("cv.doc"), FileType::Word);
        assert_eq!(FileType::from_name("notes.txt"), FileType::Text);
    }

    #[test]
    fn test_unknown_names_fall_back_to_text() {
        assert_eq!(FileType::from_name("README"), FileType::Text);
        assert_eq!(FileType::from_name("resume.md"), FileType::Text);
        assert_eq!(FileType::from_name("archive.pdf.bak"), FileType::Text);
        assert_eq!(FileType::from_name(".pdf"), FileType::Pdf);
    }
}
