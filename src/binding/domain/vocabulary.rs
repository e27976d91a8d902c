//! Well-known qualified names of the injection framework and the runtime
//! library that the default validation profile refers to.

/// `@Provides`
pub const PROVIDES: &str = "dagger.Provides";
/// `@Produces`
pub const PRODUCES: &str = "dagger.producers.Produces";
/// `@Binds`
pub const BINDS: &str = "dagger.Binds";
/// `@Multibinds`
pub const MULTIBINDS: &str = "dagger.multibindings.Multibinds";

/// `@IntoSet`
pub const INTO_SET: &str = "dagger.multibindings.IntoSet";
/// `@IntoMap`
pub const INTO_MAP: &str = "dagger.multibindings.IntoMap";
/// `@ElementsIntoSet`
pub const ELEMENTS_INTO_SET: &str = "dagger.multibindings.ElementsIntoSet";

/// `Provider<T>`
pub const PROVIDER: &str = "javax.inject.Provider";
/// `Lazy<T>`
pub const LAZY: &str = "dagger.Lazy";
/// `MembersInjector<T>`
pub const MEMBERS_INJECTOR: &str = "dagger.MembersInjector";
/// `Producer<T>`
pub const PRODUCER: &str = "dagger.producers.Producer";
/// `Produced<T>`
pub const PRODUCED: &str = "dagger.producers.Produced";

/// `Map<K, V>`
pub const MAP: &str = "java.util.Map";
/// `Set<T>`
pub const SET: &str = "java.util.Set";

/// Root of checked exceptions.
pub const EXCEPTION: &str = "java.lang.Exception";
/// Root of unchecked exceptions.
pub const RUNTIME_EXCEPTION: &str = "java.lang.RuntimeException";
/// Root of unrecoverable errors.
pub const ERROR: &str = "java.lang.Error";

/// Contribution annotations that turn a binding into a multibinding.
pub const MULTIBINDING_ANNOTATIONS: [&str; 3] = [INTO_SET, INTO_MAP, ELEMENTS_INTO_SET];
