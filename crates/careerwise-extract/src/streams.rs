//! Education stream triggers.

use careerwise_catalog::Stream;

const TRIGGERS: &[(Stream, &[&str])] = &[
    (Stream::Pcm, &["pcm", "physics", "chemistry", "math"]),
    (Stream::Pcb, &["pcb", "biology"]),
    (Stream::Pcmb, &["pcmb"]),
    (Stream::Commerce, &["commerce", "accounts", "business studies"]),
    (Stream::Arts, &["arts", "humanities"]),
];

/// Stream tags whose triggers occur in `text`. Tags are not exclusive:
/// "pcmb" also contains "pcm" and yields both.
pub fn extract_streams(text: &str) -> Vec<Stream> {
    TRIGGERS
        .iter()
        .filter(|(_, triggers)| triggers.iter().any(|t| text.contains(t)))
        .map(|(stream, _)| *stream)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_stream() {
        assert_eq!(extract_streams("i took biology"), vec![Stream::Pcb]);
    }

    #[test]
    fn test_pcmb_also_matches_pcm() {
        assert_eq!(extract_streams("pcmb student"), vec![Stream::Pcm, Stream::Pcmb]);
    }

    #[test]
    fn test_multiple_tags() {
        let streams = extract_streams("maths and business studies, some arts");
        assert_eq!(streams, vec![Stream::Pcm, Stream::Commerce, Stream::Arts]);
    }
}
