/// Document framing shared by every format version
pub const BEGIN_LINE: &str = "BEGIN:VCARD";
pub const END_LINE: &str = "END:VCARD";

/// Line terminator for every property line
pub const CRLF: &str = "\r\n";

pub const CHARSET: &str = "utf-8";
/// Parameter fragment appended to text-bearing properties below version 4
pub const CHARSET_SUFFIX: &str = const_str::concat!(";CHARSET=", CHARSET);

/// Display version assigned to freshly built records
pub const DEFAULT_VERSION: &str = "3.0";

/// Media subtype assumed when a photo or logo is attached without one
pub const DEFAULT_MEDIA_TYPE: &str = "JPEG";

pub const VCF_EXTENSION: &str = "vcf";
