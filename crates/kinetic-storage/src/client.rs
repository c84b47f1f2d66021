use aws_sdk_s3::Client;

/// Build an S3 client from a loaded SDK config.
///
/// `endpoint_url` points the client at an S3-compatible gateway (for
/// example Supabase Storage's `/storage/v1/s3`). Such gateways address
/// buckets by path, not by virtual host.
pub fn build_client(sdk_config: &aws_config::SdkConfig, endpoint_url: Option<&str>) -> Client {
    let mut builder = aws_sdk_s3::config::Builder::from(sdk_config);
    if let Some(endpoint) = endpoint_url {
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }
    Client::from_conf(builder.build())
}

/// Build an S3 client from the default AWS config chain.
pub async fn build_default_client() -> Client {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    Client::new(&config)
}
