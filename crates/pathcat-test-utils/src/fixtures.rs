//! Sample paths.

pub const METADATA_NAMESPACE: &str = "metaspace";

// HDFS
pub const HDFS_PATH: &str = "hdfs://host_name:8020/warehouse/tablespace/external/hive/taBlE_306";

// Ozone: (scheme prefix, location, expected key name)
pub const OZONE_PATHS: &[(&str, &str, &str)] = &[
    ("ofs://", "bucket1.volume1.ozone1/files/file.txt", "/files/file.txt"),
    ("ofs://", "bucket1.volume1.ozone1/file21.txt", "/file21.txt"),
    ("ofs://", "bucket1.volume1.ozone1/quarter_one/sales", "/quarter_one/sales"),
    ("ofs://", "bucket1.volume1.ozone1/quarter_one/sales/", "/quarter_one/sales"),
    ("o3fs://", "bucket1.volume1.ozone1/files/file.txt", "/files/file.txt"),
    ("o3fs://", "bucket1.volume1.ozone1/file21.txt", "/file21.txt"),
    ("o3fs://", "bucket1.volume1.ozone1/quarter_one/sales", "/quarter_one/sales"),
    ("o3fs://", "bucket1.volume1.ozone1/quarter_one/sales/", "/quarter_one/sales"),
];

// ADLS Gen2
pub const ABFS_SCHEME: &str = "abfs://";
pub const ABFSS_SCHEME: &str = "abfss://";
pub const ABFS_PATH: &str = "abfs://data@razrangersan.dfs.core.windows.net/tmp/cdp-demo/sample.csv";
pub const ABFSS_PATH: &str = "abfss://data@razrangersan.dfs.core.windows.net/tmp/cdp-demo/sample.csv";

// S3
pub const S3_SCHEME: &str = "s3://";
pub const S3A_SCHEME: &str = "s3a://";
pub const S3_PATH: &str = "s3://aws_my_bucket1/1234567890/renders/Irradiance_A.csv";
pub const S3A_PATH: &str = "s3a://aws_my_bucket1/1234567890/renders/Irradiance_A.csv";
