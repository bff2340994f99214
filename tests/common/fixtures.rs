/// Wraps top-level stylesheet content in an `xsl:stylesheet` element that
/// declares the `xsl` and `msxsl` prefixes.
pub fn stylesheet(body: &str) -> String {
    format!(
        r#"<?xml version="1.0"?>
<xsl:stylesheet version="1.0"
    xmlns:xsl="http://www.w3.org/1999/XSL/Transform"
    xmlns:msxsl="urn:schemas-microsoft-com:xslt"
    xmlns:util="urn:example:util">
{body}
    <xsl:template match="/"><out/></xsl:template>
</xsl:stylesheet>"#
    )
}

pub const VB_UTIL_SCRIPT: &str =
    r#"<msxsl:script language="VB" implements-prefix="util">Function F() ... End Function</msxsl:script>"#;

pub const CONSTANT_SCRIPTS: &str = r#"
    <msxsl:script language="JScript" implements-prefix="greet">
        hello = Hello
        bye = Goodbye
    </msxsl:script>
    <msxsl:script language="csharp" implements-prefix="math">
        pi = 3.14159
    </msxsl:script>"#;
