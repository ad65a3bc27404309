#[macro_use]
extern crate log;

use argh::FromArgs;

#[cfg(target_family = "unix")]
use smb_latest::{
    latest_file_name, AuthMode, PavaoShareFactory, ProtocolRange, SmbConnector, SmbCredentials,
    SmbProtocol,
};

#[derive(FromArgs)]
#[argh(description = "
prints the latest file (by name) of a directory on a SMB share

where positional can be: [address[:port]]")]
struct Args {
    #[argh(option, short = 'P', description = "specify password")]
    password: Option<String>,
    #[argh(option, short = 'u', description = "specify username")]
    username: String,
    #[argh(
        option,
        short = 'w',
        default = r#""WORKGROUP".to_string()"#,
        description = "specify workgroup"
    )]
    workgroup: String,
    #[argh(option, short = 's', description = "specify share")]
    share: String,
    #[argh(option, short = 'd', default = r#""/".to_string()"#, description = "directory to search")]
    dir: String,
    #[argh(
        option,
        short = 'e',
        default = "String::new()",
        description = "only consider files with this extension"
    )]
    extension: String,
    #[argh(switch, description = "authenticate with kerberos")]
    kerberos: bool,
    #[argh(switch, description = "require at least SMB2")]
    smb2: bool,
    #[argh(positional, description = "address[:port]")]
    server: String,
}

#[cfg(target_family = "unix")]
fn main() -> anyhow::Result<()> {
    assert!(env_logger::builder().try_init().is_ok());
    let args: Args = argh::from_env();
    let password = match &args.password {
        Some(p) => p.clone(),
        None => read_secret_from_tty("Password: ")?,
    };

    let connector = init_connector(&args, password);
    let factory = PavaoShareFactory::new(&args.share);

    info!("connecting to server...");
    let Some(mut session) = connector.connect(&factory)? else {
        anyhow::bail!("no server at {}", args.server);
    };
    info!("client connected");

    match latest_file_name(&mut session, &args.dir, &args.extension)? {
        Some(name) => println!("{}", name),
        None => info!("nothing found in {}", args.dir),
    }

    Ok(())
}

#[cfg(not(target_family = "unix"))]
fn main() -> anyhow::Result<()> {
    let _: Args = argh::from_env();
    anyhow::bail!("the libsmbclient backend is only available on UNIX")
}

#[cfg(target_family = "unix")]
fn init_connector(args: &Args, password: String) -> SmbConnector {
    info!(
        "initializing connector with server {} and share {}, with username {} and workgroup {}",
        args.server, args.share, args.username, args.workgroup
    );
    let mut connector = SmbConnector::new(Some(SmbCredentials::new(
        args.username.clone(),
        password,
    )))
    .host(&args.server)
    .workgroup(&args.workgroup);
    if args.kerberos {
        connector = connector.auth_mode(AuthMode::Kerberos);
    }
    if args.smb2 {
        connector = connector.protocols(ProtocolRange::new(SmbProtocol::Smb2, SmbProtocol::Smb3));
    }
    connector
}

#[cfg(target_family = "unix")]
/// Read a secret from tty with customisable prompt
fn read_secret_from_tty(prompt: &str) -> std::io::Result<String> {
    rpassword::prompt_password(prompt)
}
