//! Static feed stub.
//!
//! A constant RSS-like item fragment shown as a fenced code block. It has no
//! XML declaration or root element and is not meant to be parsed.

/// The fragment body.
pub const FEED_FRAGMENT: &str = r#"
<title>The Best Nonprofit Careers For Your Personality Type</title>
<link>https://www.truity.com/blog/best-nonprofit-careers-your-personality-type</link>
<description><p>Craving a career that's about more than just a paycheck? Look no further than the nonprofit sector. Here, your passions and principles don't just fuel your work—they become it. And with opportunities ranging from arts and education to public health and social services, there's a gig that fits every personality like a glove. Here are six of the best nonprofit career paths to help with your career planning.</p> 
<img src="https://d31u95r9ywbjex.cloudfront.net/blog/sites/default/files/media/image/2023-10/36268022_m_normal_none.jpg" width="1068" height="712" alt="The Best Nonprofit Careers For Your Personality Type" loading="lazy" class="image-style-blog-full-width" /></description>
<comments>https://www.truity.com/blog/best-nonprofit-careers-your-personality-type#comments</comments>
<enclosure url="https://d31u95r9ywbjex.cloudfront.net/blog/sites/default/files/media/image/2023-10/36268022_m_normal_none.jpg" length="52601" type="image/jpeg"/>
<guid isPermaLink="true">https://www.truity.com/blog/node/1190</guid>
<pubDate>Thu, 31 Aug 2023 06:21:21 -0700</pubDate>
<source url="https://www.truity.com/blog/rss.xml">True You Journal</source>
<dc:creator>Truity</dc:creator>
"#;

/// The fragment wrapped in an `xml` fenced block, ready for Markdown display.
pub fn fenced() -> String {
    format!("```xml\n{}\n```", FEED_FRAGMENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_is_stable() {
        assert_eq!(fenced(), fenced());
    }

    #[test]
    fn test_fenced_wraps_fragment() {
        let out = fenced();
        assert!(out.starts_with("```xml\n"));
        assert!(out.ends_with("\n```"));
        assert!(out.contains("<dc:creator>Truity</dc:creator>"));
    }

    #[test]
    fn test_fragment_has_no_declaration() {
        assert!(!FEED_FRAGMENT.contains("<?xml"));
        assert!(!FEED_FRAGMENT.contains("<rss"));
    }
}
