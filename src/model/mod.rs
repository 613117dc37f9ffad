mod key_material;

pub use key_material::{
    KeyMaterialError, RsaPrivateKeyPem, RsaPublicKeyPem, PRIVATE_KEY_PEM_FOOTER,
    PRIVATE_KEY_PEM_HEADER, PUBLIC_KEY_PEM_FOOTER, PUBLIC_KEY_PEM_HEADER,
};
