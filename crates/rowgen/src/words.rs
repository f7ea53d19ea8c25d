//! Word lists and the fixed description payload.

/// Adjectives for the first half of a generated display name.
pub const ADJECTIVES: &[&str] = &[
    "affable",
    "affectionate",
    "agreeable",
    "ambitious",
    "amiable",
    "amicable",
    "amusing",
    "brave",
    "bright",
    "broad-minded",
    "calm",
    "careful",
    "charming",
    "communicative",
    "compassionate",
    "conscientious",
    "considerate",
    "convivial",
    "courageous",
    "courteous",
    "creative",
    "decisive",
    "determined",
    "diligent",
    "diplomatic",
    "discreet",
    "dynamic",
    "easygoing",
    "emotional",
    "energetic",
    "enthusiastic",
    "exuberant",
    "fair-minded",
    "faithful",
    "fearless",
    "forceful",
    "frank",
    "friendly",
    "funny",
    "generous",
    "gentle",
    "good",
    "gregarious",
    "hard-working",
    "helpful",
    "honest",
    "humorous",
    "imaginative",
    "impartial",
    "independent",
    "intellectual",
    "intelligent",
    "intuitive",
    "inventive",
    "kind",
    "loving",
    "loyal",
    "modest",
    "neat",
    "nice",
    "optimistic",
    "passionate",
    "patient",
    "persistent",
    "pioneering",
    "philosophical",
    "placid",
    "plucky",
    "polite",
    "powerful",
    "practical",
    "pro-active",
    "quick-witted",
    "quiet",
    "rational",
    "reliable",
    "reserved",
    "resourceful",
    "romantic",
    "self-confident",
    "self-disciplined",
    "sensible",
    "sensitive",
    "shy",
    "sincere",
    "sociable",
    "straightforward",
    "sympathetic",
    "thoughtful",
    "tidy",
    "tough",
    "unassuming",
    "understanding",
    "versatile",
    "warmhearted",
    "willing",
    "witty",
];

/// Given names for the second half of a generated display name.
pub const NAMES: &[&str] = &[
    "John", "William", "James", "Charles", "George", "Frank", "Joseph", "Thomas", "Henry",
    "Robert", "Edward", "Harry", "Walter", "Arthur", "Fred", "Albert", "Samuel", "David", "Louis",
    "Joe", "Charlie", "Clarence", "Richard", "Andrew", "Daniel", "Ernest", "Will", "Jesse",
    "Oscar", "Lewis", "Peter", "Benjamin", "Frederick", "Willie", "Alfred", "Sam", "Roy",
    "Herbert", "Jacob", "Tom", "Elmer", "Carl", "Lee", "Howard", "Martin", "Michael", "Bert",
    "Herman", "Jim", "Francis", "Harvey", "Earl", "Eugene", "Ralph", "Ed", "Claude", "Edwin",
    "Ben", "Charley", "Paul", "Edgar", "Isaac", "Otto", "Luther", "Lawrence", "Ira", "Patrick",
    "Guy", "Oliver", "Theodore", "Hugh", "Clyde", "Alexander", "August", "Floyd", "Homer", "Jack",
    "Leonard", "Horace", "Marion", "Philip", "Allen", "Archie", "Stephen", "Chester", "Willis",
    "Raymond", "Rufus", "Warren", "Jessie", "Milton", "Alex", "Leo", "Julius", "Ray", "Sidney",
    "Bernard", "Dan", "Jerry", "Calvin", "Perry", "Dave", "Anthony", "Eddie", "Amos", "Dennis",
    "Clifford", "Leroy", "Wesley", "Alonzo", "Garfield", "Franklin", "Emil", "Leon", "Nathan",
    "Harold", "Matthew", "Levi", "Moses", "Everett", "Lester", "Winfield", "Adam", "Lloyd",
    "Mack", "Fredrick", "Jay", "Jess", "Melvin", "Noah", "Aaron", "Alvin", "Norman", "Gilbert",
    "Elijah", "Victor", "Gus", "Nelson", "Jasper", "Silas", "Christopher", "Jake", "Mike",
    "Percy", "Adolph", "Maurice", "Cornelius", "Felix", "Reuben", "Wallace", "Claud", "Roscoe",
    "Sylvester", "Earnest", "Hiram", "Otis", "Simon", "Willard", "Irvin", "Mark", "Jose",
    "Wilbur", "Abraham", "Virgil", "Clinton", "Elbert", "Leslie", "Marshall", "Owen", "Wiley",
    "Anton", "Morris", "Manuel", "Phillip", "Augustus", "Emmett", "Eli", "Nicholas", "Wilson",
    "Alva", "Harley", "Newton", "Timothy", "Marvin", "Ross", "Curtis", "Edmund", "Jeff", "Elias",
    "Harrison", "Stanley", "Columbus", "Lon", "Ora", "Ollie", "Russell", "Pearl", "Solomon",
    "Arch", "Asa", "Clayton", "Enoch", "Irving", "Mathew", "Nathaniel", "Scott",
];

/// Fixed description text written with every row.
///
/// Each row carries this blob unchanged; the per-row randomness lives in the
/// other columns. Roughly 2.5 KB so rows accumulate size quickly.
pub const DESCRIPTION: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed quam felis, interdum in porttitor lacinia, ornare id neque. Ut facilisis rutrum dui, in consectetur nisl. Nulla in augue ut velit bibendum tempor nec sed odio. Phasellus quam mi, rhoncus ut vehicula a, sollicitudin imperdiet massa. Mauris eget lacus in tellus semper suscipit nec eget sem. Lorem ipsum dolor sit amet, consectetur adipiscing elit. Ut imperdiet augue augue, quis tincidunt massa ullamcorper sed. Integer sit amet dapibus quam, ut laoreet ipsum. Pellentesque id bibendum ipsum. Maecenas egestas, purus nec dignissim euismod, neque ipsum dapibus purus, eu maximus elit purus quis mauris. Orci varius natoque penatibus et magnis dis parturient montes, nascetur ridiculus mus. Morbi vel tellus iaculis, sodales lectus id, pulvinar nunc.\n\nCras in euismod orci. Vestibulum a ex tincidunt, tincidunt nisi a, pretium eros. Maecenas efficitur porta justo sed gravida. Aliquam mi mi, vehicula quis orci ac, efficitur blandit urna. Class aptent taciti sociosqu ad litora torquent per conubia nostra, per inceptos himenaeos. Phasellus arcu eros, dignissim at elit eget, commodo suscipit quam. Aliquam dictum ipsum in nibh mollis, sit amet semper nibh imperdiet. Mauris hendrerit, lacus id tristique aliquam, ex ipsum consectetur est, ut placerat arcu sapien eget nulla. Maecenas dictum magna quis dapibus rhoncus. Quisque convallis arcu mi, non commodo nulla scelerisque a. Nunc ut felis erat. Morbi vel ante consequat, tincidunt erat in, condimentum orci.\n\nPhasellus porttitor, nunc quis pretium scelerisque, lacus tellus finibus orci, tempor laoreet justo mauris id purus. Donec ex ante, feugiat a dui aliquam, pharetra malesuada lectus. Nullam augue risus, porttitor sit amet volutpat ullamcorper, ornare sed elit. Morbi diam sem, dapibus id ullamcorper scelerisque, porta ut urna. Aenean et mi consectetur, tempor lorem a, vestibulum massa. Pellentesque eu est commodo, sodales erat sed, sagittis leo. Ut nec viverra diam. Nullam urna sem, tincidunt in blandit sit amet, efficitur id erat. Etiam sollicitudin accumsan ante, ac dictum lacus consequat a. Phasellus molestie nunc enim, at pharetra quam efficitur vitae.\n\nDonec ullamcorper, mauris placerat iaculis ullamcorper, libero sapien tincidunt leo, venenatis dignissim neque sapien a turpis. Donec sodales tincidunt turpis a faucibus. Quisque id mi a metus ultricies consectetur. Sed tempus et enim et dapibus. Cras ac pulvinar leo. Nam at tincidunt nulla, eu ornare diam. Proin id viverra augue. Aliquam eget mattis ante, sit amet ornare urna. Praesent iaculis laoreet augue quis pharetra. Duis venenatis elementum neque et suscipit. Etiam commodo tellus eu gravida commodo. Nunc in mattis ligula. Sed eleifend, leo at porta vehicula, ipsum felis sollicitudin magna, non eleifend dui nisl et turpis. Proin ut tortor eu leo interdum laoreet.";
