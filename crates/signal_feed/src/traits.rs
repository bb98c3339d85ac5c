pub trait RemoteResponse<T> {
    fn to_model(&self) -> T;
}
