use crate::config::Config;
use crate::danmu::Danmu;

/// True when the text contains any deny-list keyword. Empty keywords are
/// ignored so a blank editor row cannot suppress everything.
pub fn matches_deny_list(deny_list: &[String], text: &str) -> bool {
    deny_list
        .iter()
        .any(|word| !word.is_empty() && text.contains(word.as_str()))
}

/// Per-comment gate applied before a comment reaches layout: shifts the
/// timeline by `time_offset`, drops comments that land before zero, and
/// drops deny-listed content.
pub fn passes(config: &Config, danmu: &Danmu) -> bool {
    let shifted = danmu.timeline_s + config.time_offset;
    if shifted < 0.0 {
        return false;
    }
    !matches_deny_list(&config.deny_list, &danmu.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_danmu(timeline_s: f64, content: &str) -> Danmu {
        Danmu {
            timeline_s,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_deny_list_keyword_suppresses() {
        let deny_list = vec!["广告".to_string(), "spam".to_string()];
        assert!(matches_deny_list(&deny_list, "这是广告弹幕"));
        assert!(matches_deny_list(&deny_list, "pure spam here"));
        assert!(!matches_deny_list(&deny_list, "普通弹幕"));
    }

    #[test]
    fn test_empty_keyword_never_matches() {
        let deny_list = vec![String::new()];
        assert!(!matches_deny_list(&deny_list, "anything at all"));
    }

    #[test]
    fn test_negative_shifted_timeline_drops() {
        let config = Config {
            time_offset: -2.0,
            ..Default::default()
        };
        assert!(!passes(&config, &make_danmu(1.0, "早到的弹幕")));
        // Landing exactly on zero is still visible
        assert!(passes(&config, &make_danmu(2.0, "准点弹幕")));
    }

    #[test]
    fn test_delay_offset_keeps_comment() {
        let config = Config {
            time_offset: 3.0,
            ..Default::default()
        };
        assert!(passes(&config, &make_danmu(0.0, "片头弹幕")));
    }

    #[test]
    fn test_denied_content_fails_gate() {
        let config = Config {
            deny_list: vec!["剧透".to_string()],
            ..Default::default()
        };
        assert!(!passes(&config, &make_danmu(5.0, "前方剧透警告")));
        assert!(passes(&config, &make_danmu(5.0, "哈哈哈")));
    }
}
